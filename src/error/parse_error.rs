use thiserror::Error;

use crate::util::position::Position;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next token does not fit the grammar at this point.
    #[error("Error on {pos}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// A description of what the grammar allows here.
        expected: String,
        /// A description of the token that was found.
        found:    String,
        /// Position of the found token.
        pos:      Position,
    },
    /// A function lists the same parameter twice.
    #[error("Error on {pos}: Duplicate parameter '{name}' in definition of '{function}'.")]
    DuplicateParameter {
        /// The function being defined.
        function: String,
        /// The repeated parameter.
        name:     String,
        /// Position of the definition.
        pos:      Position,
    },
}

impl ParseError {
    /// The position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { pos, .. } | Self::DuplicateParameter { pos, .. } => *pos,
        }
    }
}
