//! Table session management.
//!
//! `TableSession` owns the roster, the seeded RNG, the move log, and the
//! discard-prompt collaborator. Moves go through [`TableSession::make_move`]
//! and [`TableSession::use_special_move`]; interactive frontends can instead
//! feed word commands to [`TableSession::process`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use dad_core::{CoreError, Roster, TokenKind, TokenPool};
use dad_draw::{DrawError, MessageKey, MoveRecord, MoveRequest, begin_move};

use crate::catalog;
use crate::config::TableConfig;
use crate::error::{TableError, TableResult};
use crate::journal::MoveLog;
use crate::prompt::DiscardPrompt;

const MOVE_USAGE: &str = "usage: move <name> <law|chaos> <difficulty> [difficult] [defining]";
const USE_USAGE: &str = "usage: use <name> <difficulty> <move name> [difficult] [defining]";
const SET_USAGE: &str = "usage: set <name> <law|chaos> <count>";
const SHOW_USAGE: &str = "usage: show <name>";

/// An interactive Dadlands table.
pub struct TableSession {
    roster: Roster,
    config: TableConfig,
    journal: MoveLog,
    rng: StdRng,
    prompt: Box<dyn DiscardPrompt>,
}

impl TableSession {
    /// Create a session over a roster. The RNG is seeded from the config, so
    /// the same seed and the same commands replay the same table.
    pub fn new(roster: Roster, config: TableConfig, prompt: Box<dyn DiscardPrompt>) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            roster,
            config,
            journal: MoveLog::new(),
            rng,
            prompt,
        }
    }

    /// Get the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get the move log.
    pub fn journal(&self) -> &MoveLog {
        &self.journal
    }

    /// Get the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Resolve a generic move for a character and commit it.
    ///
    /// Consults the discard prompt only when the draw is mixed and the move
    /// is not a defining moment.
    pub fn make_move(
        &mut self,
        name: &str,
        approach: TokenKind,
        difficulty: u32,
        difficult: bool,
        defining: bool,
    ) -> TableResult<MoveRecord> {
        let character = self.roster.require(name)?;
        let pool = character.pool;
        let request = MoveRequest::new(character.name.clone(), approach, difficulty)
            .with_difficult(difficult)
            .with_defining(defining);
        self.resolve(pool, request, name)
    }

    /// Resolve one of the character's special moves and commit it.
    ///
    /// The approach comes from the move; everything else matches
    /// [`make_move`](Self::make_move).
    pub fn use_special_move(
        &mut self,
        name: &str,
        move_name: &str,
        difficulty: u32,
        difficult: bool,
        defining: bool,
    ) -> TableResult<MoveRecord> {
        let character = self.roster.require(name)?;
        let special = character
            .special_move(move_name)
            .ok_or_else(|| CoreError::UnknownSpecialMove {
                character: character.name.clone(),
                name: move_name.to_string(),
            })?;
        let pool = character.pool;
        let request = MoveRequest::special(character.name.clone(), special, difficulty)
            .with_difficult(difficult)
            .with_defining(defining);
        self.resolve(pool, request, name)
    }

    fn resolve(
        &mut self,
        pool: TokenPool,
        request: MoveRequest,
        name: &str,
    ) -> TableResult<MoveRecord> {
        let pending = begin_move(pool, request, self.config.token_cap, &mut self.rng)?;
        let choice = if pending.awaits_discard() {
            self.prompt.choose_discard(
                pending.draw().count(TokenKind::Law),
                pending.draw().count(TokenKind::Chaos),
            )
        } else {
            None
        };
        let record = pending.finish(choice);
        self.roster.require_mut(name)?.pool = record.pool_after;
        self.journal.append(record.clone());
        Ok(record)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> TableResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "move" => self.do_move(rest),
            "use" => self.do_use(rest),
            "show" => self.do_show(rest),
            "roster" => self.do_roster(),
            "set" => self.do_set(rest),
            "journal" => self.do_journal(),
            "export" => self.do_export(rest),
            "help" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(TableError::UnknownCommand(other.to_string())),
        }
    }

    fn do_move(&mut self, rest: &str) -> TableResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(TableError::InvalidCommand(MOVE_USAGE.to_string()));
        }
        let Some(approach) = TokenKind::parse(parts[1]) else {
            return Err(TableError::InvalidCommand(MOVE_USAGE.to_string()));
        };
        let Ok(difficulty) = parts[2].parse::<u32>() else {
            return Err(TableError::InvalidCommand(MOVE_USAGE.to_string()));
        };
        let (difficult, defining) = parse_flags(&parts[3..])?;
        let result = self.make_move(parts[0], approach, difficulty, difficult, defining);
        render_or_warn(result)
    }

    fn do_use(&mut self, rest: &str) -> TableResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(TableError::InvalidCommand(USE_USAGE.to_string()));
        }
        let Ok(difficulty) = parts[1].parse::<u32>() else {
            return Err(TableError::InvalidCommand(USE_USAGE.to_string()));
        };

        // Trailing flag words belong to the move, not its name.
        let mut end = parts.len();
        let mut difficult = false;
        let mut defining = false;
        while end > 2 {
            match parts[end - 1].to_lowercase().as_str() {
                "difficult" => {
                    difficult = true;
                    end -= 1;
                }
                "defining" => {
                    defining = true;
                    end -= 1;
                }
                _ => break,
            }
        }
        if end == 2 {
            return Err(TableError::InvalidCommand(USE_USAGE.to_string()));
        }
        let move_name = parts[2..end].join(" ");

        let result = self.use_special_move(parts[0], &move_name, difficulty, difficult, defining);
        render_or_warn(result)
    }

    fn do_show(&self, rest: &str) -> TableResult<String> {
        let name = rest.trim();
        if name.is_empty() {
            return Err(TableError::InvalidCommand(SHOW_USAGE.to_string()));
        }
        let character = self.roster.require(name)?;

        let mut out = if character.clan.is_empty() {
            format!("{}\n", character.name)
        } else {
            format!("{} ({})\n", character.name, character.clan)
        };
        out.push_str(&format!("Pool: {}\n", character.pool));
        out.push_str(&format!(
            "Health: {} | Power: {}\n",
            character.health, character.power
        ));
        if !character.special_moves.is_empty() {
            out.push_str("Special Moves:\n");
            for special in &character.special_moves {
                if special.description.is_empty() {
                    out.push_str(&format!("  - {} ({})\n", special.name, special.approach));
                } else {
                    out.push_str(&format!(
                        "  - {} ({}): {}\n",
                        special.name, special.approach, special.description
                    ));
                }
            }
        }
        if !character.gear.is_empty() {
            out.push_str("Gear:\n");
            for item in &character.gear {
                out.push_str(&format!("  - {} x{}\n", item.name, item.quantity));
            }
        }
        if !character.biography.is_empty() {
            out.push_str(&format!("Biography: {}\n", character.biography));
        }
        Ok(out)
    }

    fn do_roster(&self) -> TableResult<String> {
        if self.roster.is_empty() {
            return Ok("No dads at the table.".to_string());
        }
        let mut out = String::new();
        for character in self.roster.iter() {
            if character.clan.is_empty() {
                out.push_str(&format!("{} - {}\n", character.name, character.pool));
            } else {
                out.push_str(&format!(
                    "{} ({}) - {}\n",
                    character.name, character.clan, character.pool
                ));
            }
        }
        Ok(out)
    }

    fn do_set(&mut self, rest: &str) -> TableResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(TableError::InvalidCommand(SET_USAGE.to_string()));
        }
        let Some(kind) = TokenKind::parse(parts[1]) else {
            return Err(TableError::InvalidCommand(SET_USAGE.to_string()));
        };
        let Ok(count) = parts[2].parse::<u32>() else {
            return Err(TableError::InvalidCommand(SET_USAGE.to_string()));
        };
        let character = self.roster.require_mut(parts[0])?;
        match kind {
            TokenKind::Law => character.pool.law = count,
            TokenKind::Chaos => character.pool.chaos = count,
        }
        Ok(format!("{}: {}", character.name, character.pool))
    }

    fn do_journal(&self) -> TableResult<String> {
        if self.journal.is_empty() {
            return Ok("No moves resolved yet.".to_string());
        }
        let mut out = String::new();
        for (i, record) in self.journal.records().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, catalog::summary_line(record)));
        }
        Ok(out)
    }

    fn do_export(&self, format: &str) -> TableResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            "json" => self.journal.export_json(),
            other => Err(TableError::InvalidCommand(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }
}

fn parse_flags(words: &[&str]) -> TableResult<(bool, bool)> {
    let mut difficult = false;
    let mut defining = false;
    for word in words {
        match word.to_lowercase().as_str() {
            "difficult" => difficult = true,
            "defining" => defining = true,
            other => {
                return Err(TableError::InvalidCommand(format!("unknown flag: {other}")));
            }
        }
    }
    Ok((difficult, defining))
}

/// Render a committed move, or turn an oversized difficulty into the
/// not-enough-tokens warning. Nothing was mutated in that case; the player
/// retries with a lower difficulty.
fn render_or_warn(result: TableResult<MoveRecord>) -> TableResult<String> {
    match result {
        Ok(record) => Ok(catalog::render_text(&record)),
        Err(TableError::Draw(DrawError::InsufficientPool { .. })) => Ok(format!(
            "Warning: {}",
            catalog::message_text(MessageKey::NotEnoughTokens)
        )),
        Err(e) => Err(e),
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  move <name> <law|chaos> <difficulty> [difficult] [defining]",
        "                         Make a move for a character",
        "  use <name> <difficulty> <move name> [difficult] [defining]",
        "                         Use one of the character's special moves",
        "  show <name>            Show a character sheet",
        "  roster                 List every dad at the table",
        "  set <name> <law|chaos> <count>   Set one side of a pool",
        "  journal                List resolved moves",
        "  export [markdown|text|json]      Export the move log",
        "  help                   Show this help",
        "  quit                   Leave the table",
    ]
    .join("\n")
}
