pub mod add;
pub mod export;
pub mod learn;
pub mod make_move;
pub mod new;
pub mod pack;
pub mod play;
pub mod roster;
pub mod set;
pub mod show;
pub mod use_move;

use std::io::{self, Write};

use clap::Args;
use rand::Rng;

use dad_core::TokenKind;
use dad_table::{AlwaysChoose, DiscardPrompt, NeverChoose, TableConfig, TableSession};

use crate::campaign::Campaign;

/// Flags shared by the one-shot resolution commands.
#[derive(Args)]
pub struct ResolveArgs {
    /// The challenge is difficult: a mixed draw counts as a failure
    #[arg(long)]
    pub difficult: bool,

    /// Defining moment: a failed draw costs every token drawn
    #[arg(long)]
    pub defining: bool,

    /// Mixed-result discard: law, chaos, ask, or none
    #[arg(long, default_value = "ask")]
    pub discard: String,

    /// RNG seed for a reproducible draw
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Parse an approach word.
pub fn parse_approach(word: &str) -> Result<TokenKind, String> {
    TokenKind::parse(word).ok_or_else(|| format!("unknown approach: \"{word}\". Use: law, chaos"))
}

/// Build the discard prompt for a `--discard` choice.
pub fn parse_discard(choice: &str) -> Result<Box<dyn DiscardPrompt>, String> {
    match choice.to_lowercase().as_str() {
        "ask" => Ok(Box::new(StdinPrompt)),
        "none" => Ok(Box::new(NeverChoose)),
        other => match TokenKind::parse(other) {
            Some(kind) => Ok(Box::new(AlwaysChoose(kind))),
            None => Err(format!(
                "unknown discard choice: \"{choice}\". Use: law, chaos, ask, none"
            )),
        },
    }
}

/// Start a table session over the campaign roster. Without an explicit seed
/// the draw order comes from OS entropy.
pub fn start_session(
    campaign: &Campaign,
    seed: Option<u64>,
    prompt: Box<dyn DiscardPrompt>,
) -> (TableSession, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let config = TableConfig::default().with_seed(seed);
    (
        TableSession::new(campaign.roster.clone(), config, prompt),
        seed,
    )
}

/// Fold a finished session back into the campaign: the updated roster plus
/// every move the session resolved.
pub fn absorb_session(campaign: &mut Campaign, session: &TableSession) {
    campaign.roster = session.roster().clone();
    for record in session.journal().records() {
        campaign.log.append(record.clone());
    }
}

/// Asks on stdin which token kind to discard from a mixed draw. EOF, a blank
/// line, or an unrecognized word all dismiss the prompt.
pub struct StdinPrompt;

impl DiscardPrompt for StdinPrompt {
    fn choose_discard(&mut self, law_drawn: u32, chaos_drawn: u32) -> Option<TokenKind> {
        println!("Mixed result: drew {law_drawn} Law and {chaos_drawn} Chaos.");
        print!("Discard which kind? (law/chaos, blank to keep both) ");
        if io::stdout().flush().is_err() {
            return None;
        }
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => TokenKind::parse(line.trim()),
        }
    }
}
