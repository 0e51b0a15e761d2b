//! CLI frontend for Knobelbecher, a dice cup for the terminal.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "knobel",
    about = "Knobelbecher — roll dice, spin sentences, shake to roll",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a set of dice once
    Roll {
        /// Number of dice to roll
        #[arg(short = 'n', long, default_value = "1")]
        dice: u32,

        /// Sides per die: a number or a die tag like d20
        #[arg(short, long, default_value = "d20")]
        sides: String,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate random D&D-flavored sentences
    Sentence {
        /// How many sentences to generate
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// JSON file with custom word tables
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a motion sample log and roll on every detected shake
    Shake {
        /// JSON file containing an array of motion samples
        log: PathBuf,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sit down at the table: an interactive dice session
    Play {
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { dice, sides, seed } => commands::roll::run(dice, &sides, seed),
        Commands::Sentence {
            count,
            tables,
            seed,
        } => commands::sentence::run(count, tables.as_deref(), seed),
        Commands::Shake { log, seed } => commands::shake::run(&log, seed),
        Commands::Play { seed } => commands::play::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
