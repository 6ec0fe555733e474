//! Table runner for Dadlands.
//!
//! Wires the draw engine to a roster, a seeded RNG, the discard-prompt seam,
//! and an append-only move log. Frontends drive a [`TableSession`] either
//! through its typed methods or through [`TableSession::process`], which
//! speaks the same word commands as the interactive play mode.

pub mod catalog;
pub mod config;
pub mod error;
pub mod journal;
pub mod prompt;
pub mod session;

pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use journal::MoveLog;
pub use prompt::{AlwaysChoose, DiscardPrompt, NeverChoose};
pub use session::TableSession;
