use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::token::{TokenKind, TokenPool};

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A clamped numeric resource on the sheet (health, power).
///
/// Tracks are table-side bookkeeping adjusted by hand; the draw engine never
/// touches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Minimum value (usually 0).
    pub min: i32,
}

impl Track {
    /// Create a track starting at its maximum value, with a minimum of 0.
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            min: 0,
        }
    }

    /// Adjust the track by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(self.min, self.max);
        self.current
    }

    /// Returns true if the track is at its minimum value.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// A piece of gear carried by a character. Inventory only, no mechanics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    /// Display name of the item.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// How many are carried.
    pub quantity: u32,
    /// Weight per item, in whatever unit the table agrees on.
    pub weight: f64,
}

impl Gear {
    /// Create a single item with no description and zero weight.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            quantity: 1,
            weight: 0.0,
        }
    }
}

/// A named move variant with a fixed approach, owned by a character.
///
/// Using a special move resolves exactly like a generic move except the
/// approach comes from the move instead of being chosen per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialMove {
    /// Display name of the move.
    pub name: String,
    /// The token kind this move always aligns with.
    pub approach: TokenKind,
    /// Free-text description, carried into move records for display.
    pub description: String,
}

impl SpecialMove {
    /// Create a special move with an empty description.
    pub fn new(name: impl Into<String>, approach: TokenKind) -> Self {
        Self {
            name: name.into(),
            approach,
            description: String::new(),
        }
    }
}

/// A player character: one dad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier for this character.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// The clan this dad belongs to.
    pub clan: String,
    /// Free-text background.
    pub biography: String,
    /// Current law/chaos token pool. Mutated only by committed moves.
    pub pool: TokenPool,
    /// Health track, 0 to 10.
    pub health: Track,
    /// Power track, 0 to 5.
    pub power: Track,
    /// Carried items.
    pub gear: Vec<Gear>,
    /// Owned special moves.
    pub special_moves: Vec<SpecialMove>,
    /// Timestamp when the character was created.
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Create a fresh character with the starting pool and full tracks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            clan: String::new(),
            biography: String::new(),
            pool: TokenPool::default(),
            health: Track::new(10),
            power: Track::new(5),
            gear: Vec::new(),
            special_moves: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the clan, builder style.
    pub fn with_clan(mut self, clan: impl Into<String>) -> Self {
        self.clan = clan.into();
        self
    }

    /// Set the token pool, builder style.
    pub fn with_pool(mut self, pool: TokenPool) -> Self {
        self.pool = pool;
        self
    }

    /// Find an owned special move by name (case-insensitive).
    pub fn special_move(&self, name: &str) -> Option<&SpecialMove> {
        self.special_moves
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Attach a special move to this character.
    pub fn add_special_move(&mut self, special_move: SpecialMove) {
        self.special_moves.push(special_move);
    }

    /// Add an item to the character's gear list.
    pub fn add_gear(&mut self, gear: Gear) {
        self.gear.push(gear);
    }
}
