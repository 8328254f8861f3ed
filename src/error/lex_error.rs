use thiserror::Error;

use crate::util::position::Position;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on {pos}: Unexpected character '{ch}'.")]
    UnexpectedCharacter {
        /// The offending character.
        ch:  char,
        /// Where it was found.
        pos: Position,
    },
    /// A string literal without its closing quote.
    #[error("Error on {pos}: Unterminated string literal.")]
    UnterminatedString {
        /// Where the string starts.
        pos: Position,
    },
}

impl LexError {
    /// The position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { pos, .. } | Self::UnterminatedString { pos } => *pos,
        }
    }
}
