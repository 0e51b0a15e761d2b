use std::fs;
use std::path::Path;

use kb_prose::{SentenceGenerator, WordTables};

pub fn run(count: u32, tables: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let tables = match tables {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            WordTables::from_json_str(&raw).map_err(|e| e.to_string())?
        }
        None => WordTables::default(),
    };

    let generator = SentenceGenerator::new(tables).map_err(|e| e.to_string())?;
    let mut rng = super::make_rng(seed);

    for _ in 0..count {
        println!("{}", generator.generate(&mut rng));
    }
    Ok(())
}
