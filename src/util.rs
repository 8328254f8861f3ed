/// Numeric conversion helpers.
///
/// Every count, index and range bound in djerba arrives as an `f64`. These
/// helpers turn such values into integers and indices without silently
/// truncating fractional values or wrapping negative ones.
pub mod num;
/// Source positions.
///
/// Maps byte offsets produced by the lexer onto 1-based line and column
/// pairs that are attached to tokens, AST nodes and errors.
pub mod position;
/// Stack growth for deep recursion.
///
/// The evaluator and parser recurse once per nesting level. Wrapping those
/// recursive entry points keeps deep (but permitted) programs from
/// exhausting the native stack.
pub mod stack;
