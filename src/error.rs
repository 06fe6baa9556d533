//! Error types for IRC line parsing.
//!
//! The grammar has exactly one required production (the command), so there is
//! exactly one way for a line to be rejected.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing IRC lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// No valid command token was found where the grammar requires one.
    ///
    /// `position` is the byte offset, within the line after carriage-return
    /// trimming, at which the command was expected or at which the line
    /// stopped matching.
    #[error("invalid command at position {position}")]
    InvalidCommand {
        /// Byte offset where parsing stopped.
        position: usize,
    },
}

impl MessageParseError {
    /// Byte offset at which the line stopped matching the grammar.
    pub fn position(&self) -> usize {
        match self {
            MessageParseError::InvalidCommand { position } => *position,
        }
    }
}
