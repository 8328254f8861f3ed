use thiserror::Error;

use crate::util::position::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Read a variable that no enclosing scope defines.
    #[error("Error on {pos}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// Where the variable was read.
        pos:  Position,
    },
    /// Called a name that is neither user-defined nor built in.
    #[error("Error on {pos}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// Where the call happened.
        pos:  Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on {pos}: '{name}' expects {expected} argument(s), got {found}.")]
    ArityMismatch {
        /// The function being called.
        name:     String,
        /// The accepted argument count, such as `2` or `1 to 3`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// Where the call happened.
        pos:      Position,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on {pos}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// Where the operation happened.
        pos:     Position,
    },
    /// Indexed outside a list or string.
    #[error("Error on {pos}: Index {index} is out of bounds for length {len}.")]
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The length of the indexed value.
        len:   usize,
        /// Where the indexing happened.
        pos:   Position,
    },
    /// Divided (or took a remainder) by zero.
    #[error("Error on {pos}: Division by zero.")]
    DivisionByZero {
        /// Where the division happened.
        pos: Position,
    },
    /// A built-in received an argument outside its mathematical domain.
    #[error("Error on {pos}: Domain error: {details}.")]
    DomainError {
        /// Details about the argument.
        details: String,
        /// Where the call happened.
        pos:     Position,
    },
    /// Removed an element from an empty list.
    #[error("Error on {pos}: Cannot pop from an empty list.")]
    EmptyList {
        /// Where the call happened.
        pos: Position,
    },
    /// Function calls nested deeper than the configured limit.
    #[error("Error on {pos}: Stack overflow: call depth exceeded {limit}.")]
    StackOverflow {
        /// The configured maximum call depth.
        limit: usize,
        /// The call that went over the limit.
        pos:   Position,
    },
    /// `break` or `continue` executed with no enclosing loop.
    #[error("Error on {pos}: '{keyword}' outside of a loop.")]
    BreakOrContinueOutsideLoop {
        /// Either `break` or `continue`.
        keyword: &'static str,
        /// Position of the statement.
        pos:     Position,
    },
}

impl RuntimeError {
    /// The position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { pos, .. }
            | Self::UndefinedFunction { pos, .. }
            | Self::ArityMismatch { pos, .. }
            | Self::TypeMismatch { pos, .. }
            | Self::IndexOutOfBounds { pos, .. }
            | Self::DivisionByZero { pos }
            | Self::DomainError { pos, .. }
            | Self::EmptyList { pos }
            | Self::StackOverflow { pos, .. }
            | Self::BreakOrContinueOutsideLoop { pos, .. } => *pos,
        }
    }
}
