use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::position::Position,
};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Converts a number to an `i64` if it is finite and has no fractional part.
///
/// ## Errors
/// Returns `TypeMismatch` for fractional or non-finite numbers and for
/// magnitudes beyond [`MAX_SAFE_INTEGER`].
///
/// ## Example
/// ```
/// use djerba::{error::RuntimeError, util::{num::f64_to_i64_checked, position::Position}};
///
/// assert_eq!(f64_to_i64_checked(3.0, Position::default()).unwrap(), 3);
///
/// let err = f64_to_i64_checked(1.5, Position::default()).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64, pos: Position) -> EvalResult<i64> {
    if !value.is_finite() || value.abs() > MAX_SAFE_INTEGER {
        return Err(RuntimeError::TypeMismatch { details: format!("{value} is not a usable integer"),
                                                pos });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::TypeMismatch { details: format!("expected an integer, found {value}"),
                                                pos });
    }
    Ok(value as i64)
}

/// Truncates a number toward zero and converts it to an `i64`.
///
/// Used where the language accepts any number but works on its integer part,
/// such as `range` and `substr` bounds.
///
/// ## Errors
/// Returns `TypeMismatch` for non-finite numbers and for magnitudes beyond
/// [`MAX_SAFE_INTEGER`].
///
/// ## Example
/// ```
/// use djerba::util::{num::f64_to_i64_truncated, position::Position};
///
/// assert_eq!(f64_to_i64_truncated(2.9, Position::default()).unwrap(), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9, Position::default()).unwrap(), -2);
/// ```
pub fn f64_to_i64_truncated(value: f64, pos: Position) -> EvalResult<i64> {
    f64_to_i64_checked(value.trunc(), pos)
}

/// Converts a length or count to a djerba number.
///
/// Collection sizes never approach `2^53` in practice, so the conversion is
/// exact for every value the interpreter can produce.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an integer produced from a djerba number back into one.
///
/// Callers only pass values within [`MAX_SAFE_INTEGER`], where the
/// conversion is exact.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Resolves an index value against a collection of length `len`.
///
/// ## Errors
/// - `TypeMismatch` if `index` is not integer-valued.
/// - `IndexOutOfBounds` if `index` is negative or not below `len`.
///
/// ## Example
/// ```
/// use djerba::{error::RuntimeError, util::{num::index_checked, position::Position}};
///
/// assert_eq!(index_checked(2.0, 3, Position::default()).unwrap(), 2);
///
/// let err = index_checked(-1.0, 3, Position::default()).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { .. }));
/// ```
pub fn index_checked(index: f64, len: usize, pos: Position) -> EvalResult<usize> {
    let index = f64_to_i64_checked(index, pos)?;

    usize::try_from(index).ok()
                          .filter(|&i| i < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { index, len, pos })
}

/// Clamps a truncated number into `0..=len`.
///
/// ## Example
/// ```
/// use djerba::util::{num::clamp_to_len, position::Position};
///
/// assert_eq!(clamp_to_len(-4.0, 5, Position::default()).unwrap(), 0);
/// assert_eq!(clamp_to_len(2.5, 5, Position::default()).unwrap(), 2);
/// assert_eq!(clamp_to_len(99.0, 5, Position::default()).unwrap(), 5);
/// ```
pub fn clamp_to_len(value: f64, len: usize, pos: Position) -> EvalResult<usize> {
    let value = f64_to_i64_truncated(value, pos)?;

    Ok(usize::try_from(value).map_or(0, |v| v.min(len)))
}
