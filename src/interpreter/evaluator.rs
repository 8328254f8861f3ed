/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, equality and ordering between two
/// already evaluated values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the control signals, statement dispatch and
/// the expression evaluator.
pub mod core;

/// Evaluation of conditionals and loops.
///
/// Decides which control signals each construct absorbs and which it passes
/// on to its caller.
pub mod statement;

/// Utility functions for evaluation.
///
/// Variable lookup, list literals, indexing and the short-circuiting logical
/// operators.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
