use std::path::Path;

use dad_core::SpecialMove;

use crate::campaign::Campaign;

use super::parse_approach;

pub fn run(
    character: &str,
    name: &str,
    approach: &str,
    description: &str,
    file: &Path,
) -> Result<(), String> {
    let approach = parse_approach(approach)?;
    let mut campaign = Campaign::load(file)?;

    let dad = campaign
        .roster
        .require_mut(character)
        .map_err(|e| e.to_string())?;
    let mut special = SpecialMove::new(name, approach);
    special.description = description.to_string();
    dad.add_special_move(special);
    let dad_name = dad.name.clone();

    campaign.save(file)?;

    println!("{dad_name} learned {name} ({approach})");

    Ok(())
}
