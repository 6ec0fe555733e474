use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use crate::campaign::Campaign;

pub fn run(file: &Path) -> Result<(), String> {
    let campaign = Campaign::load(file)?;

    if campaign.roster.is_empty() {
        println!("  No dads in '{}' yet.", campaign.name);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name", "Clan", "Law", "Chaos", "Health", "Power", "Moves",
    ]);

    for dad in campaign.roster.iter() {
        let clan = if dad.clan.is_empty() {
            "—".to_string()
        } else {
            dad.clan.clone()
        };
        table.add_row(vec![
            dad.name.clone(),
            clan,
            dad.pool.law.to_string(),
            dad.pool.chaos.to_string(),
            dad.health.to_string(),
            dad.power.to_string(),
            dad.special_moves.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} dads", campaign.roster.len());

    Ok(())
}
