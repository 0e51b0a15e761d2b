//! Interactive roll session state.
//!
//! Holds the current dice and sides settings, the random-dice and
//! random-sentence toggles, and the outputs of the most recent roll.

use kb_dice::{RollBounds, RollResult, STANDARD_DICE, parse_sides, roll};
use kb_prose::SentenceGenerator;
use rand::rngs::StdRng;

/// Mutable state for an interactive dice session.
pub struct RollSession {
    bounds: RollBounds,
    generator: SentenceGenerator,
    rng: StdRng,
    dice: u32,
    sides: u32,
    random_dice: bool,
    random_sentence: bool,
    last_roll: Option<RollResult>,
    last_sentence: Option<String>,
}

impl RollSession {
    /// Start a session with the default bounds: 1 die, 20 sides, both
    /// toggles off.
    pub fn new(generator: SentenceGenerator, rng: StdRng) -> Self {
        Self {
            bounds: RollBounds::default(),
            generator,
            rng,
            dice: 1,
            sides: 20,
            random_dice: false,
            random_sentence: false,
            last_roll: None,
            last_sentence: None,
        }
    }

    /// Roll with the current settings, honoring both toggles.
    ///
    /// With random dice enabled the roll first randomizes its own shape
    /// within bounds; with random sentences enabled it also generates one.
    pub fn perform_roll(&mut self) {
        if self.random_dice {
            let (dice, sides) = self.bounds.random_request(&mut self.rng);
            self.dice = dice;
            self.sides = sides;
        }
        self.last_roll = Some(roll(self.dice, self.sides, &self.bounds, &mut self.rng));
        self.last_sentence = self
            .random_sentence
            .then(|| self.generator.generate(&mut self.rng));
    }

    /// The most recent roll, if any.
    pub fn last_roll(&self) -> Option<&RollResult> {
        self.last_roll.as_ref()
    }

    /// The sentence generated alongside the most recent roll, if any.
    pub fn last_sentence(&self) -> Option<&str> {
        self.last_sentence.as_deref()
    }

    /// Process one line of user input and return the text to display.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or("").to_lowercase();
        let argument = words.next();

        match (command.as_str(), argument) {
            ("roll" | "r", _) => Ok(self.do_roll()),
            ("dice", Some(raw)) => {
                let count: u32 = raw
                    .parse()
                    .map_err(|_| format!("'{raw}' is not a dice count"))?;
                self.dice = self.bounds.clamp_dice(count);
                Ok(format!("Rolling {} dice.", self.dice))
            }
            ("dice", None) => Err("usage: dice <count>".into()),
            ("sides", Some(raw)) => {
                let sides =
                    parse_sides(raw).ok_or_else(|| format!("'{raw}' is not a sides count or die tag"))?;
                self.sides = self.bounds.clamp_sides(sides);
                Ok(format!("Dice now have {} sides.", self.sides))
            }
            ("sides", None) => Err("usage: sides <count|dN>".into()),
            ("random", Some(flag)) => {
                self.random_dice = parse_toggle(flag)?;
                Ok(toggle_message("Random dice", self.random_dice))
            }
            ("random", None) => Err("usage: random on|off".into()),
            ("sentence", Some(flag)) => {
                self.random_sentence = parse_toggle(flag)?;
                Ok(toggle_message("Random sentences", self.random_sentence))
            }
            ("sentence", None) => Err("usage: sentence on|off".into()),
            ("status", _) => Ok(self.status()),
            ("help", _) => Ok(help_text()),
            ("quit" | "q", _) => Ok("Goodbye!".to_string()),
            _ => Err(format!("unknown command '{input}' — type 'help'")),
        }
    }

    fn do_roll(&mut self) -> String {
        self.perform_roll();
        let mut output = String::new();
        if let Some(sentence) = &self.last_sentence {
            output.push_str(sentence);
            output.push('\n');
        }
        if let Some(result) = &self.last_roll {
            output.push_str(&format!("{}d{}: {result}", self.dice, self.sides));
        }
        output
    }

    fn status(&self) -> String {
        let mut output = format!(
            "Dice: {} | Sides: {} | Random dice: {} | Random sentences: {}",
            self.dice,
            self.sides,
            on_off(self.random_dice),
            on_off(self.random_sentence)
        );
        if let Some(result) = &self.last_roll {
            output.push_str(&format!("\nLast roll: {result}"));
        }
        output
    }
}

fn parse_toggle(flag: &str) -> Result<bool, String> {
    match flag.to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("'{other}' is not on or off")),
    }
}

fn toggle_message(what: &str, enabled: bool) -> String {
    format!("{what} {}.", if enabled { "enabled" } else { "disabled" })
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn help_text() -> String {
    let picks: Vec<String> = STANDARD_DICE.iter().map(|s| format!("d{s}")).collect();
    format!(
        "Commands:\n  \
         roll             roll with the current settings\n  \
         dice <count>     set the number of dice\n  \
         sides <n|dN>     set sides per die ({} or any dN)\n  \
         random on|off    randomize dice and sides on every roll\n  \
         sentence on|off  generate a sentence with every roll\n  \
         status           show the current settings\n  \
         quit             leave the table",
        picks.join(" ")
    )
}
