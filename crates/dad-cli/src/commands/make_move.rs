use std::path::Path;

use colored::Colorize;

use dad_draw::{DrawError, MessageKey};
use dad_table::{TableError, catalog};

use crate::campaign::Campaign;

use super::{ResolveArgs, absorb_session, parse_approach, parse_discard, start_session};

pub fn run(
    character: &str,
    approach: &str,
    difficulty: u32,
    resolve: &ResolveArgs,
    file: &Path,
) -> Result<(), String> {
    let approach = parse_approach(approach)?;
    let prompt = parse_discard(&resolve.discard)?;
    let mut campaign = Campaign::load(file)?;
    let (mut session, _) = start_session(&campaign, resolve.seed, prompt);

    match session.make_move(
        character,
        approach,
        difficulty,
        resolve.difficult,
        resolve.defining,
    ) {
        Ok(record) => {
            print!("{}", catalog::render_text(&record));
            absorb_session(&mut campaign, &session);
            campaign.save(file)
        }
        Err(TableError::Draw(DrawError::InsufficientPool { .. })) => {
            println!(
                "{}",
                catalog::message_text(MessageKey::NotEnoughTokens).yellow()
            );
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
