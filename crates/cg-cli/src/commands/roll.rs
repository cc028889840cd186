use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cg_character::{BuilderConfig, Character, LineNotify, LinePrompt, build_character};

use crate::OutputFormat;

pub fn run(seed: Option<u64>, interactive: bool, format: OutputFormat) -> Result<(), String> {
    let mut config = BuilderConfig::default().with_randomize(!interactive);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut rng = config.rng();
    let stdin = io::stdin();
    let mut prompt = LinePrompt::new(stdin.lock(), dialogue_writer(format));
    let mut notify = LineNotify::new(dialogue_writer(format));

    let character = build_character(config.randomize, &mut rng, &mut prompt, &mut notify)
        .map_err(|e| format!("failed to build character: {e}"))?;

    match format {
        OutputFormat::Text => print_sheet(&character),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&character).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Where prompts and menus go. JSON keeps stdout for the document alone.
fn dialogue_writer(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}

fn print_sheet(character: &Character) {
    let race = character
        .race
        .map_or_else(|| "unset".dimmed().to_string(), |r| r.name().bold().to_string());

    println!();
    println!("  {} {race}", "Race:".bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "", "Score"]);
    for (ability, score) in character.abilities.iter() {
        let score = score.map_or_else(|| "—".to_string(), |s| s.to_string());
        table.add_row(vec![
            ability.name().to_string(),
            ability.abbreviation().to_string(),
            score,
        ]);
    }
    println!("{table}");
}
