use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Arity},
        host::Host,
        value::core::Value,
    },
    util::{
        num::{clamp_to_len, usize_to_f64},
        position::Position,
    },
};

/// Returns the number of characters in a string or elements in a list.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::string::len, host::Host, value::core::Value},
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
/// assert_eq!(len(&["héllo".into()], &mut Silent, pos).unwrap(), Value::Number(5.0));
///
/// let list = Value::from(vec![Value::Bool(true)]);
/// assert_eq!(len(&[list], &mut Silent, pos).unwrap(), Value::Number(1.0));
/// ```
pub fn len(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let count = match args {
        [Value::Str(s)] => s.chars().count(),
        [Value::List(list)] => list.borrow().len(),
        [other] => {
            return Err(RuntimeError::TypeMismatch { details: format!("'len' needs a string or a list, found {}",
                                                                     other.type_name()),
                                                    pos });
        },
        _ => return Err(Arity::exact(1).mismatch("len", args.len(), pos)),
    };

    Ok(Value::Number(usize_to_f64(count)))
}

/// Converts a string to upper case.
pub fn upper(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [s] = args else {
        return Err(Arity::exact(1).mismatch("upper", args.len(), pos));
    };

    Ok(Value::from(s.as_str("argument to 'upper'", pos)?.to_uppercase()))
}

/// Converts a string to lower case.
pub fn lower(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [s] = args else {
        return Err(Arity::exact(1).mismatch("lower", args.len(), pos));
    };

    Ok(Value::from(s.as_str("argument to 'lower'", pos)?.to_lowercase()))
}

/// `substr(s, start[, end])`: the characters of `s` from `start` up to but
/// not including `end`.
///
/// `end` defaults to the length of `s`. Both bounds are truncated to
/// integers and clamped to `0..=len`, and a range with `start >= end` is
/// empty, so `substr` never fails on its bounds.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::string::substr, host::Host, value::core::Value},
///     util::position::Position,
/// };
///
/// # struct Silent;
/// # impl Host for Silent {
/// #     fn emit(&mut self, _: &[Value]) {}
/// #     fn read_line(&mut self, _: Option<&str>) -> String { String::new() }
/// # }
/// let pos = Position::default();
/// let s = Value::from("djerba");
///
/// let r = substr(&[s.clone(), 1.0.into(), 4.0.into()], &mut Silent, pos).unwrap();
/// assert_eq!(r, Value::from("jer"));
///
/// let r = substr(&[s.clone(), 3.0.into()], &mut Silent, pos).unwrap();
/// assert_eq!(r, Value::from("rba"));
///
/// let r = substr(&[s, (-5.0).into(), 100.0.into()], &mut Silent, pos).unwrap();
/// assert_eq!(r, Value::from("djerba"));
/// ```
pub fn substr(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let (s, start, end) = match args {
        [s, start] => (s, start, None),
        [s, start, end] => (s, start, Some(end)),
        _ => return Err(Arity::between(2, 3).mismatch("substr", args.len(), pos)),
    };

    let s = s.as_str("first argument to 'substr'", pos)?;
    let len = s.chars().count();

    let start = clamp_to_len(start.as_number("start of 'substr'", pos)?, len, pos)?;
    let end = match end {
        Some(end) => clamp_to_len(end.as_number("end of 'substr'", pos)?, len, pos)?,
        None => len,
    };

    if start >= end {
        return Ok(Value::from(""));
    }

    Ok(Value::from(s.chars().skip(start).take(end - start).collect::<String>()))
}
