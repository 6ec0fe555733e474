use std::path::Path;

use dad_core::{Character, TokenPool};

use crate::campaign::Campaign;

pub fn run(
    name: &str,
    clan: &str,
    bio: &str,
    law: u32,
    chaos: u32,
    file: &Path,
) -> Result<(), String> {
    let mut campaign = Campaign::load(file)?;

    let mut character = Character::new(name).with_pool(TokenPool::new(law, chaos));
    if !clan.is_empty() {
        character = character.with_clan(clan);
    }
    if !bio.is_empty() {
        character.biography = bio.to_string();
    }

    campaign
        .roster
        .add(character)
        .map_err(|e| e.to_string())?;
    campaign.save(file)?;

    println!("Added {name} to '{}' ({law} Law / {chaos} Chaos)", campaign.name);

    Ok(())
}
