//! Error types for the draw engine.

/// Errors that can occur when beginning a move.
///
/// Everything past [`begin_move`](crate::begin_move) is a game outcome, not
/// an error: the pool cap and terminal character failure are carried on the
/// [`MoveRecord`](crate::MoveRecord) instead.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The requested difficulty exceeds the tokens available in the pool.
    /// Recoverable: retry with a lower difficulty. Nothing was sampled or
    /// mutated.
    #[error("not enough tokens: difficulty {difficulty} exceeds the {available} in the pool")]
    InsufficientPool {
        /// The difficulty that was requested.
        difficulty: u32,
        /// Tokens actually available in the pool.
        available: u32,
    },

    /// A move must draw at least one token.
    #[error("difficulty must be at least 1")]
    ZeroDifficulty,
}

/// Convenience result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;
