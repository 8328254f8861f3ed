use thiserror::Error;

use crate::util::position::Position;

/// Lexing errors.
///
/// Raised while scanning raw text: characters outside the language and
/// string literals that never close.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token sequence does not fit the grammar, such as missing
/// braces, stray tokens after a statement, or malformed definitions.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation: unknown names, wrong argument counts, type
/// mismatches, out-of-range indices, arithmetic and domain failures, and
/// control flow that escapes its construct.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single `run`, tagged by the phase that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be scanned into tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Completion status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The program ran to completion.
    Success,
    /// Scanning failed.
    LexFailure,
    /// Parsing failed.
    ParseFailure,
    /// Execution failed.
    RuntimeFailure,
}

impl Error {
    /// The status corresponding to this error's phase.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Lex(_) => Status::LexFailure,
            Self::Parse(_) => Status::ParseFailure,
            Self::Runtime(_) => Status::RuntimeFailure,
        }
    }

    /// The source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl<T> From<&Result<T, Error>> for Status {
    fn from(result: &Result<T, Error>) -> Self {
        result.as_ref().map_or_else(Error::status, |_| Self::Success)
    }
}
