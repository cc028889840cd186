//! CLI frontend for the chargen character generator.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "chargen",
    about = "Roll up a tabletop role-playing character",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log each roll and assignment to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a character
    Roll {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Choose scores and race yourself instead of at random
        #[arg(short, long)]
        interactive: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List playable races and their ability bonuses
    Races,
}

/// How a finished character is printed.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sheet
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            seed,
            interactive,
            format,
        } => commands::roll::run(seed, interactive, format),
        Commands::Races => commands::races::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
