use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator and operand types. `+` concatenates when either side is a
    /// string or both sides are lists, and adds otherwise. The remaining
    /// arithmetic operators go to `eval_scalar_op`. Relational and equality
    /// operators use `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use djerba::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     util::position::Position,
    /// };
    ///
    /// let pos = Position::default();
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &3.0.into(), &4.0.into(), pos);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let text = Context::eval_binary(BinaryOperator::Add, &"n=".into(), &4.0.into(), pos);
    /// assert_eq!(text.unwrap(), Value::from("n=4"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        use Value::{List, Number, Str};

        match op {
            Add => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(a + b)),
                (Str(_), _) | (_, Str(_)) => Ok(Self::eval_concat_str(left, right)),
                (List(a), List(b)) => Ok(Self::eval_concat_list(a, b)),
                _ => Err(operand_mismatch(op, left, right, pos)),
            },
            Sub | Mul | Div | Mod | Pow => match (left, right) {
                (Number(a), Number(b)) => Self::eval_scalar_op(op, *a, *b, pos),
                _ => Err(operand_mismatch(op, left, right, pos)),
            },
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, pos)
            },
        }
    }
}

/// Builds the error for operand types an operator does not accept.
pub(in crate::interpreter::evaluator) fn operand_mismatch(op: BinaryOperator,
                                                          left: &Value,
                                                          right: &Value,
                                                          pos: Position)
                                                          -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 pos }
}
