/// Program and expression entry points.
///
/// Holds [`core::parse`], the shared result type and the statement
/// terminator checks.
pub mod core;

/// Statement parsing.
///
/// Assignments, print, conditionals, loops, function definitions and the
/// jump statements `!>`, `break` and `continue`.
pub mod statement;

/// Brace-delimited blocks.
pub mod block;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to the
/// right-associative power operator.
pub mod binary;

/// Unary, postfix and primary expressions.
pub mod unary;

/// Token helpers shared by the parsing functions.
mod utils;
