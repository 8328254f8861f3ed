/// Operator dispatch.
///
/// Routes each binary operator to the handler for its operand types.
pub mod core;

/// Numeric arithmetic: `-`, `*`, `/`, `%`, `^` and numeric `+`.
pub mod scalar;

/// Equality and ordering.
pub mod comparison;

/// `+` on strings and lists.
pub mod concat;
