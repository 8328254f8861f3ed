use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::operand_mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::position::Position,
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `==` and `!=`, any two values may be compared; values of different
    /// types are unequal. The relational operators order two numbers
    /// numerically or two strings lexicographically.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `pos`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
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
    /// let r = Context::eval_comparison(BinaryOperator::Less, &3.0.into(), &5.0.into(), pos);
    /// assert_eq!(r.unwrap(), Value::Bool(true));
    ///
    /// let r = Context::eval_comparison(BinaryOperator::Equal, &"1".into(), &1.0.into(), pos);
    /// assert_eq!(r.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if let Equal | NotEqual = op {
            return Ok(Value::Bool((left == right) == (op == Equal)));
        }

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => return Err(operand_mismatch(op, left, right, pos)),
        };

        // NaN is unordered, so every relational test on it is false.
        let Some(ordering) = ordering else {
            return Ok(Value::Bool(false));
        };

        Ok(Value::Bool(match op {
                           Less => ordering == Ordering::Less,
                           LessEqual => ordering != Ordering::Greater,
                           Greater => ordering == Ordering::Greater,
                           GreaterEqual => ordering != Ordering::Less,
                           _ => return Err(operand_mismatch(op, left, right, pos)),
                       }))
    }
}
