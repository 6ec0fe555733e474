//! Core types for Dadlands: token pools, characters, and rosters.
//!
//! This crate defines the character model the draw engine operates on, with
//! no dependency on the engine itself. A [`Roster`] can be built
//! programmatically or deserialized from JSON.

/// Characters ("dads"), their resource tracks, gear, and special moves.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// The roster: the store of characters at a table.
pub mod roster;
/// Token kinds and token pools.
pub mod token;

/// Re-export character types.
pub use character::{Character, CharacterId, Gear, SpecialMove, Track};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export token types.
pub use token::{TokenKind, TokenPool};
