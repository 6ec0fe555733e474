use std::path::Path;

use dad_core::TokenKind;

use crate::campaign::Campaign;

pub fn run(character: &str, kind: &str, count: u32, file: &Path) -> Result<(), String> {
    let kind = TokenKind::parse(kind)
        .ok_or_else(|| format!("unknown token kind: \"{kind}\". Use: law, chaos"))?;
    let mut campaign = Campaign::load(file)?;

    let dad = campaign
        .roster
        .require_mut(character)
        .map_err(|e| e.to_string())?;
    match kind {
        TokenKind::Law => dad.pool.law = count,
        TokenKind::Chaos => dad.pool.chaos = count,
    }
    let line = format!("{}: {}", dad.name, dad.pool);

    campaign.save(file)?;

    println!("{line}");

    Ok(())
}
