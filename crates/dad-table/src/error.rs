//! Error types for the table runner.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while running a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Roster error (unknown character, duplicate name, unknown move).
    #[error("{0}")]
    Core(#[from] dad_core::CoreError),

    /// Draw engine error (bad difficulty).
    #[error("{0}")]
    Draw(#[from] dad_draw::DrawError),

    /// Unknown command in the processor.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command was recognized but its arguments did not parse.
    #[error("{0}")]
    InvalidCommand(String),

    /// Journal serialization error.
    #[error("journal export failed: {0}")]
    Json(#[from] serde_json::Error),
}
