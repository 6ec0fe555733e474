use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two token types every pool is made of.
///
/// Doubles as the approach of a move: a move is always attempting to align
/// with either law or chaos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Order, rules, responsibility.
    Law,
    /// Impulse, improvisation, trouble.
    Chaos,
}

impl TokenKind {
    /// Returns the other token kind.
    pub fn opposite(self) -> Self {
        match self {
            Self::Law => Self::Chaos,
            Self::Chaos => Self::Law,
        }
    }

    /// Parse a kind from user input like "law" or "Chaos".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "law" => Some(Self::Law),
            "chaos" => Some(Self::Chaos),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Law => write!(f, "law"),
            Self::Chaos => write!(f, "chaos"),
        }
    }
}

/// A character's current law/chaos token counts.
///
/// Both counts stay non-negative; the draw engine clamps every mutation.
/// Pools are only written through a resolved move's commit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPool {
    /// Law tokens currently held.
    pub law: u32,
    /// Chaos tokens currently held.
    pub chaos: u32,
}

impl TokenPool {
    /// Create a pool with the given counts.
    pub fn new(law: u32, chaos: u32) -> Self {
        Self { law, chaos }
    }

    /// Total tokens in the pool.
    pub fn total(&self) -> u32 {
        self.law + self.chaos
    }

    /// Count of tokens of one kind.
    pub fn count(&self, kind: TokenKind) -> u32 {
        match kind {
            TokenKind::Law => self.law,
            TokenKind::Chaos => self.chaos,
        }
    }
}

impl Default for TokenPool {
    /// The starting pool for a new dad: 4 law, 3 chaos.
    fn default() -> Self {
        Self { law: 4, chaos: 3 }
    }
}

impl fmt::Display for TokenPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Law / {} Chaos", self.law, self.chaos)
    }
}
