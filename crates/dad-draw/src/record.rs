//! Move records: the write-once summary of a resolved move.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dad_core::{TokenKind, TokenPool};

use crate::sampler::Draw;

/// Unique identifier for a resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveId(pub Uuid);

impl MoveId {
    /// Generate a new random move ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MoveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// How a draw classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every drawn token matched the approach.
    Success,
    /// No drawn token matched the approach.
    Failure,
    /// Both kinds drawn on an ordinary move.
    MixedSuccess,
    /// Both kinds drawn on a difficult move.
    MixedFail,
}

impl Outcome {
    /// True for the two outcomes produced by a draw containing both kinds.
    pub fn is_mixed(self) -> bool {
        matches!(self, Self::MixedSuccess | Self::MixedFail)
    }

    /// True for the outcomes a defining moment escalates: full failure and
    /// mixed fail.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure | Self::MixedFail)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::MixedSuccess => write!(f, "Mixed Success"),
            Self::MixedFail => write!(f, "Mixed Fail"),
        }
    }
}

/// A signed change to a pool, applied with clamping at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenDelta {
    /// Change to the law count.
    pub law: i32,
    /// Change to the chaos count.
    pub chaos: i32,
}

impl TokenDelta {
    /// The zero delta.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add `amount` to one side of the delta.
    pub fn add(&mut self, kind: TokenKind, amount: i32) {
        match kind {
            TokenKind::Law => self.law += amount,
            TokenKind::Chaos => self.chaos += amount,
        }
    }

    /// True if applying this delta would grow the pool on either side.
    pub fn is_gain(&self) -> bool {
        self.law > 0 || self.chaos > 0
    }

    /// Apply the delta to a pool, clamping each side at zero.
    pub fn apply(&self, pool: TokenPool) -> TokenPool {
        TokenPool::new(
            apply_one(pool.law, self.law),
            apply_one(pool.chaos, self.chaos),
        )
    }
}

fn apply_one(count: u32, delta: i32) -> u32 {
    if delta >= 0 {
        count.saturating_add(delta as u32)
    } else {
        count.saturating_sub(delta.unsigned_abs())
    }
}

/// Terminal character failure: which side of the pool ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Law pool exhausted.
    Deadbeat,
    /// Chaos pool exhausted.
    Hardass,
    /// Both pools exhausted at once.
    Both,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deadbeat => write!(f, "deadbeat"),
            Self::Hardass => write!(f, "hardass"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Stable identifiers for user-facing message strings.
///
/// The engine never renders text. Frontends map keys to a catalog, so the
/// identifiers here must not change even if the default wording does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    /// Every token matched: the move lands clean.
    OutcomeSuccess,
    /// No token matched: the move goes wrong.
    OutcomeFailure,
    /// Mixed draw on an ordinary move: it works, at a cost.
    OutcomeMixedSuccess,
    /// Mixed draw on a difficult move: it fails, and costs.
    OutcomeMixedFail,
    /// A defining moment went badly: every drawn token is lost.
    DefiningFailure,
    /// Law hit zero: the dad is a deadbeat.
    BecameDeadbeat,
    /// Chaos hit zero: the dad is a hardass.
    BecameHardass,
    /// Both pools ran dry at once: the character has completely failed.
    CharacterFailed,
    /// A gain was discarded because the pool sits at its cap.
    MaxTokensReached,
    /// The requested difficulty exceeds the pool.
    NotEnoughTokens,
}

/// The immutable summary of one resolved move, appended to the table's log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Unique identifier for this record.
    pub id: MoveId,
    /// Name of the character who made the move.
    pub character: String,
    /// Display name of the move ("Move" for a generic one).
    pub move_name: String,
    /// Description carried from a special move, if any.
    pub move_description: Option<String>,
    /// The approach the move aligned with.
    pub approach: TokenKind,
    /// How many tokens were drawn.
    pub difficulty: u32,
    /// Whether the move was difficult.
    pub difficult: bool,
    /// Whether the move was a defining moment.
    pub defining: bool,
    /// The drawn tokens, in draw order.
    pub draw: Draw,
    /// How the draw classified.
    pub outcome: Outcome,
    /// The delta that was actually applied (after every policy).
    pub delta: TokenDelta,
    /// The pool as committed.
    pub pool_after: TokenPool,
    /// True if a gain was discarded by the pool cap.
    pub max_tokens_reached: bool,
    /// Terminal failure, if the move emptied a side of the pool.
    pub failure: Option<FailureKind>,
    /// Message keys for display, in presentation order.
    pub messages: Vec<MessageKey>,
    /// When the move resolved.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_id_display_shows_short_form() {
        let id = MoveId(Uuid::parse_str("deadbeef-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "deadbeef");
    }

    #[test]
    fn outcome_predicates() {
        assert!(Outcome::MixedSuccess.is_mixed());
        assert!(Outcome::MixedFail.is_mixed());
        assert!(!Outcome::Success.is_mixed());
        assert!(Outcome::Failure.is_failure());
        assert!(Outcome::MixedFail.is_failure());
        assert!(!Outcome::MixedSuccess.is_failure());
        assert!(!Outcome::Success.is_failure());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(Outcome::MixedFail.to_string(), "Mixed Fail");
    }

    #[test]
    fn delta_apply_clamps_at_zero() {
        let delta = TokenDelta { law: -5, chaos: 2 };
        let after = delta.apply(TokenPool::new(2, 3));
        assert_eq!(after, TokenPool::new(0, 5));
    }

    #[test]
    fn delta_gain_detection() {
        assert!(TokenDelta { law: 1, chaos: 0 }.is_gain());
        assert!(TokenDelta { law: -2, chaos: 1 }.is_gain());
        assert!(!TokenDelta::zero().is_gain());
        assert!(!TokenDelta { law: -1, chaos: -1 }.is_gain());
    }

    #[test]
    fn delta_add_targets_one_side() {
        let mut delta = TokenDelta::zero();
        delta.add(TokenKind::Chaos, -1);
        assert_eq!(delta, TokenDelta { law: 0, chaos: -1 });
    }

    #[test]
    fn message_keys_serialize_as_identifiers() {
        let json = serde_json::to_string(&MessageKey::MaxTokensReached).unwrap();
        assert_eq!(json, "\"MaxTokensReached\"");
    }
}
