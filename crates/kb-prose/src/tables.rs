//! Word-category tables the generator draws from.
//!
//! The built-in defaults carry a D&D-flavored vocabulary. Custom tables can
//! be loaded from JSON; every table must be non-empty, enforced at
//! load/construction time rather than mid-generation.

use serde::{Deserialize, Serialize};

use crate::error::{ProseError, ProseResult};

const SUBJECTS: &[&str] = &[
    "The brave knight",
    "A cunning rogue",
    "The wise wizard",
    "A fearsome dragon",
    "The ancient lich",
    "A goblin raiding party",
    "The paladin who shit himself",
    "The bard with a lot of copium right here",
    "The cleric going to 1v1 God in a fight",
    "The barbarian saying 'Nah I'd win'",
    "The ranger asking 'Is this a gun in your pocket or are you just happy to see me ?'",
    "The sorcerer who knows your IP if you're reading this",
    "The warlock who calls you a virgin if you're reading this",
];

const VERBS: &[&str] = &[
    "attacked",
    "explored",
    "cast a spell on",
    "guarded",
    "discovered",
    "fled from",
    "shat upon",
    "copiumed on",
    "challenged to a divine duel",
    "confidently declared victory over",
    "flirted with",
    "doxxed",
    "insulted",
];

const OBJECTS: &[&str] = &[
    "the dark dungeon",
    "a hidden treasure",
    "the magical artifact",
    "an unsuspecting village",
    "the ancient ruins",
    "a powerful incantation",
    "the tavern floor",
    "a pile of scrolls",
    "the heavens themselves",
    "a surprised beholder",
    "a confused guard",
    "the entire internet",
    "a snickering imp",
];

const ADVERBS: &[&str] = &[
    "fiercely",
    "stealthily",
    "magically",
    "bravely",
    "cautiously",
    "suddenly",
    "explosively",
    "excessively",
    "boldly",
    "arrogantly",
    "suggestively",
    "ominously",
    "mockingly",
];

const PREPOSITIONS: &[&str] = &[
    "within",
    "atop",
    "beneath",
    "beyond",
    "towards",
    "against",
    "in front of",
    "with",
    "before",
    "despite",
    "near",
    "throughout",
    "at",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "so", "because", "while", "although", "yet"];

const NOUNS: &[&str] = &[
    "castle",
    "forest",
    "mountain",
    "cavern",
    "spellbook",
    "curse",
    "latrine",
    "potion",
    "pantheon",
    "ego",
    "codpiece",
    "database",
    "scroll of insults",
];

const ADJECTIVES: &[&str] = &[
    "enchanted",
    "cursed",
    "mysterious",
    "dangerous",
    "legendary",
    "forgotten",
    "stinky",
    "overflowing",
    "almighty",
    "unbeatable",
    "bulging",
    "all-knowing",
    "scathing",
];

/// The eight word-category tables, fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTables {
    /// Sentence subjects ("The brave knight").
    pub subjects: Vec<String>,
    /// Past-tense verbs ("attacked").
    pub verbs: Vec<String>,
    /// Object noun phrases ("the dark dungeon").
    pub objects: Vec<String>,
    /// Adverbs ("fiercely").
    pub adverbs: Vec<String>,
    /// Prepositions ("beneath").
    pub prepositions: Vec<String>,
    /// Conjunctions joining chained clauses ("and").
    pub conjunctions: Vec<String>,
    /// Bare nouns for prepositional phrases ("castle").
    pub nouns: Vec<String>,
    /// Adjectives ("enchanted").
    pub adjectives: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for WordTables {
    fn default() -> Self {
        Self {
            subjects: owned(SUBJECTS),
            verbs: owned(VERBS),
            objects: owned(OBJECTS),
            adverbs: owned(ADVERBS),
            prepositions: owned(PREPOSITIONS),
            conjunctions: owned(CONJUNCTIONS),
            nouns: owned(NOUNS),
            adjectives: owned(ADJECTIVES),
        }
    }
}

impl WordTables {
    /// Load and validate custom tables from a JSON object with one array
    /// field per table.
    pub fn from_json_str(json: &str) -> ProseResult<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check that every table has at least one entry.
    pub(crate) fn validate(&self) -> ProseResult<()> {
        let named: [(&'static str, &[String]); 8] = [
            ("subjects", &self.subjects),
            ("verbs", &self.verbs),
            ("objects", &self.objects),
            ("adverbs", &self.adverbs),
            ("prepositions", &self.prepositions),
            ("conjunctions", &self.conjunctions),
            ("nouns", &self.nouns),
            ("adjectives", &self.adjectives),
        ];
        for (name, table) in named {
            if table.is_empty() {
                return Err(ProseError::EmptyTable(name));
            }
        }
        Ok(())
    }
}
