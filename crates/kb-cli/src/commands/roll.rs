use colored::Colorize;

use kb_dice::{RollBounds, parse_sides, roll};

pub fn run(dice: u32, sides: &str, seed: Option<u64>) -> Result<(), String> {
    let sides = parse_sides(sides).ok_or_else(|| format!("'{sides}' is not a sides count or die tag"))?;
    let bounds = RollBounds::default();
    let mut rng = super::make_rng(seed);

    let result = roll(dice, sides, &bounds, &mut rng);
    println!(
        "{} {}d{}: {result}",
        "Rolled".bold(),
        bounds.clamp_dice(dice),
        bounds.clamp_sides(sides)
    );
    Ok(())
}
