use std::path::Path;

use colored::Colorize;

use crate::campaign::Campaign;

pub fn run(name: &str, file: &Path) -> Result<(), String> {
    let campaign = Campaign::load(file)?;
    let dad = campaign.roster.require(name).map_err(|e| e.to_string())?;

    if dad.clan.is_empty() {
        println!("  {}", dad.name.bold());
    } else {
        println!("  {} [{}]", dad.name.bold(), dad.clan.dimmed());
    }
    println!();
    println!("  pool:   {}", dad.pool);
    println!("  health: {}", dad.health);
    println!("  power:  {}", dad.power);

    if !dad.special_moves.is_empty() {
        println!();
        println!("  {}", "Special moves:".dimmed());
        for special in &dad.special_moves {
            if special.description.is_empty() {
                println!("    {} ({})", special.name, special.approach);
            } else {
                println!(
                    "    {} ({}): {}",
                    special.name, special.approach, special.description
                );
            }
        }
    }

    if !dad.gear.is_empty() {
        println!();
        println!("  {}", "Gear:".dimmed());
        for item in &dad.gear {
            println!("    {} x{}", item.name, item.quantity);
        }
    }

    if !dad.biography.is_empty() {
        println!();
        for line in dad.biography.lines() {
            println!("  {}", line.trim());
        }
    }

    Ok(())
}
