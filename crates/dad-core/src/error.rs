/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a roster.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No character with the given name exists in the roster.
    #[error("no character named \"{0}\" in the roster")]
    UnknownCharacter(String),

    /// A character with the same name already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateCharacter(String),

    /// The character exists but owns no special move with the given name.
    #[error("\"{character}\" has no special move named \"{name}\"")]
    UnknownSpecialMove {
        /// The character that was asked.
        character: String,
        /// The unresolved move name.
        name: String,
    },
}
