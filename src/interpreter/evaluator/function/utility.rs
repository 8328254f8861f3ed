use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Arity},
        host::Host,
        value::core::Value,
    },
    util::{
        num::{f64_to_i64_truncated, i64_to_f64},
        position::Position,
    },
};

/// Builds a list of numbers.
///
/// - `range(end)` counts from `0` up to but not including `end`.
/// - `range(start, end)` counts from `start` up to but not including `end`.
/// - `range(start, end, step)` moves by `step`, which may be negative to
///   count down.
///
/// All arguments are truncated toward zero first.
///
/// # Errors
/// `DomainError` if `step` is zero.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::utility::range, host::Host, value::core::Value},
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
/// let r = range(&[1.0.into(), 5.0.into()], &mut Silent, pos).unwrap();
/// assert_eq!(r.to_string(), "[1, 2, 3, 4]");
///
/// let r = range(&[5.0.into(), 0.0.into(), (-2.0).into()], &mut Silent, pos).unwrap();
/// assert_eq!(r.to_string(), "[5, 3, 1]");
/// ```
pub fn range(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let bound = |value: &Value| f64_to_i64_truncated(value.as_number("argument to 'range'", pos)?, pos);

    let (start, end, step) = match args {
        [end] => (0, bound(end)?, 1),
        [start, end] => (bound(start)?, bound(end)?, 1),
        [start, end, step] => (bound(start)?, bound(end)?, bound(step)?),
        _ => return Err(Arity::between(1, 3).mismatch("range", args.len(), pos)),
    };

    if step == 0 {
        return Err(RuntimeError::DomainError { details: "'range' step must not be zero".to_string(),
                                               pos });
    }

    let mut values = Vec::new();
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        values.push(Value::Number(i64_to_f64(current)));
        current += step;
    }

    Ok(Value::from(values))
}

/// Returns the type name of a value: `"number"`, `"string"`, `"bool"`,
/// `"list"`, `"function"` or `"none"`.
pub fn type_of(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [value] = args else {
        return Err(Arity::exact(1).mismatch("type", args.len(), pos));
    };

    Ok(Value::from(value.type_name()))
}

/// Reads one line from the host, showing the optional prompt first.
///
/// The prompt may be any value; it is shown in its display form.
pub fn input(args: &[Value], host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let prompt = match args {
        [] => None,
        [prompt] => Some(prompt.to_string()),
        _ => return Err(Arity::between(0, 1).mismatch("input", args.len(), pos)),
    };

    Ok(Value::from(host.read_line(prompt.as_deref())))
}

/// Emits its arguments as one line, like `:>`, and returns `none`.
#[allow(clippy::unnecessary_wraps)]
pub fn print(args: &[Value], host: &mut dyn Host, _pos: Position) -> EvalResult<Value> {
    host.emit(args);
    Ok(Value::None)
}
