//! Interactive table session over a campaign file.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::campaign::Campaign;

use super::{StdinPrompt, absorb_session, start_session};

pub fn run(seed: Option<u64>, file: &Path) -> Result<(), String> {
    let mut campaign = Campaign::load(file)?;
    let (mut session, seed) = start_session(&campaign, seed, Box::new(StdinPrompt));

    println!("  {} {}", "Campaign:".bold(), campaign.name);
    println!("  Dads: {} | Seed: {seed}", session.roster().len());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        // No persistent stdin lock here: the discard prompt reads stdin too.
        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    absorb_session(&mut campaign, &session);
    campaign.save(file)?;
    println!("  Saved to {}", file.display());

    Ok(())
}
