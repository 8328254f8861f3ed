use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Arity},
        host::Host,
        value::core::Value,
    },
    util::position::Position,
};

/// Appends `item` to `list` in place and returns the list.
///
/// Registered as both `append` and `push`.
///
/// # Example
/// ```
/// use djerba::{
///     interpreter::{evaluator::function::list::append, host::Host, value::core::Value},
///     util::position::Position,
/// };
///
/// # struct Silent;
/// # impl Host for Silent {
/// #     fn emit(&mut self, _: &[Value]) {}
/// #     fn read_line(&mut self, _: Option<&str>) -> String { String::new() }
/// # }
/// let list = Value::from(vec![Value::Number(1.0)]);
/// let alias = list.clone();
///
/// append(&[list, Value::Number(2.0)], &mut Silent, Position::default()).unwrap();
///
/// assert_eq!(alias.to_string(), "[1, 2]");
/// ```
pub fn append(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [list, item] = args else {
        return Err(Arity::exact(2).mismatch("append", args.len(), pos));
    };

    list.as_list("first argument to 'append'", pos)?
        .borrow_mut()
        .push(item.clone());

    Ok(list.clone())
}

/// Removes and returns the last element of a list.
///
/// # Errors
/// `EmptyList` if the list has no elements.
pub fn pop(args: &[Value], _host: &mut dyn Host, pos: Position) -> EvalResult<Value> {
    let [list] = args else {
        return Err(Arity::exact(1).mismatch("pop", args.len(), pos));
    };

    list.as_list("argument to 'pop'", pos)?
        .borrow_mut()
        .pop()
        .ok_or(RuntimeError::EmptyList { pos })
}
