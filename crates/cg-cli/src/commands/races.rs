use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cg_character::Race;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Race", "Ability bonuses"]);

    for race in Race::ALL {
        let bonuses: Vec<String> = race
            .ability_bonuses()
            .iter()
            .map(|(ability, bonus)| format!("+{bonus} {ability}"))
            .collect();
        let bonuses = if bonuses.is_empty() {
            "—".to_string()
        } else {
            bonuses.join(", ")
        };
        table.add_row(vec![race.name().to_string(), bonuses]);
    }

    println!("  {}", "Playable races".bold());
    println!("{table}");
    Ok(())
}
