//! The recursive sentence generator.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::ProseResult;
use crate::tables::WordTables;

/// Maximum depth for chained clauses. The guard is checked before recursing,
/// so generation terminates within depths 0..=5.
const MAX_DEPTH: u32 = 5;

/// Branch probabilities of the grammar. These are load-bearing contract
/// values that reproduce the generator's feel, not tunable defaults; tests
/// override them to force specific branches.
#[derive(Debug, Clone, Copy)]
struct Chances {
    /// Chance to append an adverb after the verb.
    adverb: f64,
    /// Chance the object phrase carries an adjective.
    object_adjective: f64,
    /// Chance to append a prepositional phrase.
    prepositional: f64,
    /// Chance the prepositional phrase carries an adjective, applicable only
    /// when the object phrase carried none.
    prep_adjective: f64,
    /// Chance to chain another clause via a conjunction.
    continuation: f64,
}

const CHANCES: Chances = Chances {
    adverb: 0.5,
    object_adjective: 0.7,
    prepositional: 0.6,
    prep_adjective: 0.7,
    continuation: 0.1,
};

/// Generates random sentences from fixed word-category tables.
///
/// Immutable once constructed; callers pass their own RNG per call, so a
/// shared generator is safe to use from multiple threads.
#[derive(Debug, Clone)]
pub struct SentenceGenerator {
    tables: WordTables,
    chances: Chances,
}

impl SentenceGenerator {
    /// Create a generator over the given tables.
    ///
    /// Fails fast if any table is empty; generation itself cannot fail.
    pub fn new(tables: WordTables) -> ProseResult<Self> {
        tables.validate()?;
        Ok(Self {
            tables,
            chances: CHANCES,
        })
    }

    #[cfg(test)]
    fn with_chances(tables: WordTables, chances: Chances) -> ProseResult<Self> {
        tables.validate()?;
        Ok(Self { tables, chances })
    }

    /// Generate one sentence: non-empty, single-spaced, ending in exactly
    /// one period.
    pub fn generate(&self, rng: &mut StdRng) -> String {
        self.generate_at(0, rng)
    }

    fn generate_at(&self, depth: u32, rng: &mut StdRng) -> String {
        let mut sentence = String::new();

        sentence.push_str(pick(&self.tables.subjects, rng));
        sentence.push(' ');
        sentence.push_str(pick(&self.tables.verbs, rng));

        if rng.random_bool(self.chances.adverb) {
            sentence.push(' ');
            sentence.push_str(pick(&self.tables.adverbs, rng));
        }

        let (object_phrase, has_adjective) = self.object_phrase(rng);
        sentence.push(' ');
        sentence.push_str(&object_phrase);

        if rng.random_bool(self.chances.prepositional) {
            sentence.push(' ');
            sentence.push_str(&self.prepositional_phrase(has_adjective, rng));
        }

        if depth < MAX_DEPTH && rng.random_bool(self.chances.continuation) {
            sentence.push(' ');
            sentence.push_str(pick(&self.tables.conjunctions, rng));
            sentence.push(' ');
            sentence.push_str(&lowercase_first(&self.generate_at(depth + 1, rng)));
        }

        let sentence = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
        if sentence.ends_with('.') {
            sentence
        } else {
            format!("{sentence}.")
        }
    }

    /// Build the object phrase; reports whether it carried an adjective.
    fn object_phrase(&self, rng: &mut StdRng) -> (String, bool) {
        let adjective = rng
            .random_bool(self.chances.object_adjective)
            .then(|| pick(&self.tables.adjectives, rng));
        let object = pick(&self.tables.objects, rng);
        match adjective {
            Some(adjective) => (format!("{adjective} {object}"), true),
            None => (object.to_string(), false),
        }
    }

    /// Build a prepositional phrase. At most one adjective per sentence body:
    /// the phrase only considers one when the object phrase carried none.
    fn prepositional_phrase(&self, object_has_adjective: bool, rng: &mut StdRng) -> String {
        let mut parts: Vec<&str> = vec![pick(&self.tables.prepositions, rng)];
        if let Some(article) = pick_article(rng) {
            parts.push(article);
        }
        if !object_has_adjective && rng.random_bool(self.chances.prep_adjective) {
            parts.push(pick(&self.tables.adjectives, rng));
        }
        parts.push(pick(&self.tables.nouns, rng));
        parts.join(" ")
    }
}

fn pick<'a>(table: &'a [String], rng: &mut StdRng) -> &'a str {
    &table[rng.random_range(0..table.len())]
}

/// Pick "a", "the", or no article, each with probability 1/3.
fn pick_article(rng: &mut StdRng) -> Option<&'static str> {
    match rng.random_range(0..3) {
        0 => Some("a"),
        1 => Some("the"),
        _ => None,
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProseError;
    use rand::SeedableRng;

    fn single(word: &str) -> Vec<String> {
        vec![word.to_string()]
    }

    /// One entry per table so branch output is predictable.
    fn fixed_tables() -> WordTables {
        WordTables {
            subjects: single("The knight"),
            verbs: single("attacked"),
            objects: single("the dungeon"),
            adverbs: single("fiercely"),
            prepositions: single("beneath"),
            conjunctions: single("meanwhile"),
            nouns: single("castle"),
            adjectives: single("cursed"),
        }
    }

    fn no_branches() -> Chances {
        Chances {
            adverb: 0.0,
            object_adjective: 0.0,
            prepositional: 0.0,
            prep_adjective: 0.0,
            continuation: 0.0,
        }
    }

    #[test]
    fn rejects_empty_tables_at_construction() {
        let tables = WordTables {
            adjectives: Vec::new(),
            ..WordTables::default()
        };
        assert!(matches!(
            SentenceGenerator::new(tables),
            Err(ProseError::EmptyTable("adjectives"))
        ));
    }

    #[test]
    fn always_non_empty_with_single_trailing_period() {
        let generator = SentenceGenerator::new(WordTables::default()).unwrap();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentence = generator.generate(&mut rng);
            assert!(!sentence.is_empty());
            assert!(sentence.ends_with('.'), "no period: {sentence}");
            assert!(!sentence.ends_with(".."), "double period: {sentence}");
            assert!(!sentence.contains("  "), "uncollapsed spaces: {sentence}");
        }
    }

    #[test]
    fn minimal_sentence_is_subject_verb_object() {
        let generator = SentenceGenerator::with_chances(fixed_tables(), no_branches()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate(&mut rng), "The knight attacked the dungeon.");
    }

    #[test]
    fn recursion_stops_at_depth_five() {
        let chances = Chances {
            continuation: 1.0,
            ..no_branches()
        };
        let generator = SentenceGenerator::with_chances(fixed_tables(), chances).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let sentence = generator.generate(&mut rng);
        // The continuation branch is forced on, so the only thing limiting
        // the chain is the depth guard: 6 clauses joined by 5 conjunctions.
        assert_eq!(sentence.matches("meanwhile").count(), 5);
        assert_eq!(sentence.matches("The knight").count(), 1);
        assert_eq!(sentence.matches("the knight").count(), 5);
        assert!(sentence.ends_with('.'));
        assert!(!sentence.ends_with(".."));
    }

    #[test]
    fn chained_clause_starts_lowercased() {
        let chances = Chances {
            continuation: 1.0,
            ..no_branches()
        };
        let generator = SentenceGenerator::with_chances(fixed_tables(), chances).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let sentence = generator.generate(&mut rng);
        assert!(sentence.contains("meanwhile the knight attacked"));
    }

    #[test]
    fn adjective_appears_at_most_once() {
        // Force every adjective opportunity on: the prepositional phrase must
        // still skip its adjective because the object phrase used one.
        let chances = Chances {
            adverb: 0.0,
            object_adjective: 1.0,
            prepositional: 1.0,
            prep_adjective: 1.0,
            continuation: 0.0,
        };
        let generator = SentenceGenerator::with_chances(fixed_tables(), chances).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentence = generator.generate(&mut rng);
            assert_eq!(sentence.matches("cursed").count(), 1, "{sentence}");
        }
    }

    #[test]
    fn prep_phrase_takes_adjective_when_object_has_none() {
        let chances = Chances {
            adverb: 0.0,
            object_adjective: 0.0,
            prepositional: 1.0,
            prep_adjective: 1.0,
            continuation: 0.0,
        };
        let generator = SentenceGenerator::with_chances(fixed_tables(), chances).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentence = generator.generate(&mut rng);
            assert_eq!(sentence.matches("cursed").count(), 1, "{sentence}");
            assert!(sentence.contains("beneath"), "{sentence}");
            assert!(sentence.contains("castle"), "{sentence}");
        }
    }

    #[test]
    fn collapses_whitespace_from_table_entries() {
        let mut tables = fixed_tables();
        tables.objects = single("the   dark \t dungeon");
        let generator = SentenceGenerator::with_chances(tables, no_branches()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generator.generate(&mut rng),
            "The knight attacked the dark dungeon."
        );
    }

    #[test]
    fn keeps_existing_trailing_period() {
        let mut tables = fixed_tables();
        tables.objects = single("the dungeon.");
        let generator = SentenceGenerator::with_chances(tables, no_branches()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate(&mut rng), "The knight attacked the dungeon.");
    }

    #[test]
    fn deterministic_with_seed() {
        let generator = SentenceGenerator::new(WordTables::default()).unwrap();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(generator.generate(&mut rng1), generator.generate(&mut rng2));
    }
}
