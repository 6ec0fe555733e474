use std::path::Path;

use dad_core::Gear;

use crate::campaign::Campaign;

pub fn run(
    character: &str,
    item: &str,
    quantity: u32,
    weight: f64,
    file: &Path,
) -> Result<(), String> {
    let mut campaign = Campaign::load(file)?;

    let dad = campaign
        .roster
        .require_mut(character)
        .map_err(|e| e.to_string())?;
    let mut gear = Gear::new(item);
    gear.quantity = quantity;
    gear.weight = weight;
    dad.add_gear(gear);
    let dad_name = dad.name.clone();

    campaign.save(file)?;

    println!("{dad_name} packed {item} x{quantity}");

    Ok(())
}
