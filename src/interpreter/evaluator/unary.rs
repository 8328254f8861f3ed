use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Any other operand is a type mismatch.
    /// - `Not`: logical negation of the operand's truthiness, for any value.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `pos`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use djerba::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let pos = Position::default();
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), pos).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::from(""), pos).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(RuntimeError::TypeMismatch { details: format!("cannot negate {}",
                                                                           other.type_name()),
                                                          pos }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
