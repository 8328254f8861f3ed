use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Arity},
        host::Host,
        value::core::Value,
    },
    util::position::Position,
};

/// Applies a unary `f64` method to a numeric argument.
///
/// The generated functions accept exactly one argument. Non-numeric
/// arguments produce a `TypeMismatch` error.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::math::floor, host::Host, value::core::Value},
///     util::position::Position,
/// };
///
/// # struct Silent;
/// # impl Host for Silent {
/// #     fn emit(&mut self, _: &[Value]) {}
/// #     fn read_line(&mut self, _: Option<&str>) -> String { String::new() }
/// # }
/// let r = floor(&[Value::Number(3.8)], &mut Silent, Position::default()).unwrap();
/// assert_eq!(r, Value::Number(3.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)` for a number `x`.")]
        pub fn $fname(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
            let [x] = args else {
                return Err(Arity::exact(1).mismatch(stringify!($fname), args.len(), pos));
            };
            let x = x.as_number(concat!("argument to '", stringify!($fname), "'"), pos)?;

            Ok(Value::Number(x.$real_fn()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(abs, abs);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(round, round_ties_even);

/// Computes the square root of a number.
///
/// # Errors
/// `DomainError` for negative arguments.
///
/// # Example
/// ```
/// use djerba::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::math::sqrt, host::Host, value::core::Value},
///     util::position::Position,
/// };
///
/// # struct Silent;
/// # impl Host for Silent {
/// #     fn emit(&mut self, _: &[Value]) {}
/// #     fn read_line(&mut self, _: Option<&str>) -> String { String::new() }
/// # }
/// let pos = Position::default();
///
/// assert_eq!(sqrt(&[Value::Number(9.0)], &mut Silent, pos).unwrap(), Value::Number(3.0));
///
/// let err = sqrt(&[Value::Number(-1.0)], &mut Silent, pos).unwrap_err();
/// assert!(matches!(err, RuntimeError::DomainError { .. }));
/// ```
pub fn sqrt(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [x] = args else {
        return Err(Arity::exact(1).mismatch("sqrt", args.len(), pos));
    };
    let x = x.as_number("argument to 'sqrt'", pos)?;

    if x < 0.0 {
        return Err(RuntimeError::DomainError { details: format!("sqrt of negative number {x}"),
                                               pos });
    }
    Ok(Value::Number(x.sqrt()))
}

/// Raises `x` to the power `y`. Same as `x ^ y`.
pub fn pow(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [x, y] = args else {
        return Err(Arity::exact(2).mismatch("pow", args.len(), pos));
    };
    let x = x.as_number("base of 'pow'", pos)?;
    let y = y.as_number("exponent of 'pow'", pos)?;

    Ok(Value::Number(x.powf(y)))
}

/// Computes the minimum or maximum of its arguments.
///
/// Accepts either one or more numbers, or a single list of numbers. The
/// operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. NaN orders above every other number.
///
/// # Errors
/// - `TypeMismatch` if an element is not a number.
/// - `DomainError` if a single list argument is empty.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::math::min_max, value::core::Value},
///     util::position::Position,
/// };
///
/// let pos = Position::default();
///
/// let r = min_max("min", &[Value::Number(3.0), Value::Number(-7.0)], pos).unwrap();
/// assert_eq!(r, Value::Number(-7.0));
///
/// let list = Value::from(vec![Value::Number(2.5), Value::Number(1.0)]);
/// assert_eq!(min_max("max", &[list], pos).unwrap(), Value::Number(2.5));
/// ```
pub fn min_max(name: &str, args: &[Value], pos: Position) -> EvalResult<Value> {
    let values = match args {
        [Value::List(list)] => list.borrow().to_vec(),
        _ => args.to_vec(),
    };

    let what = format!("argument to '{name}'");
    let mut numbers = Vec::with_capacity(values.len());
    for value in &values {
        numbers.push(OrderedFloat(value.as_number(&what, pos)?));
    }

    let result = if name == "min" {
        numbers.into_iter().min()
    } else {
        numbers.into_iter().max()
    };

    result.map(|n| Value::Number(n.into_inner()))
          .ok_or_else(|| RuntimeError::DomainError { details: format!("'{name}' of an empty list"),
                                                     pos })
}
