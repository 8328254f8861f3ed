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
    /// Evaluates a numeric arithmetic operation.
    ///
    /// Division and modulo by zero are checked explicitly. Modulo is floored,
    /// so a non-zero result takes the sign of the divisor: `-7 % 3` is `2`.
    /// The operator must be arithmetic; comparisons are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source position for error reporting.
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
    /// let r = Context::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0, pos).unwrap();
    /// assert_eq!(r, Value::Number(2.0));
    ///
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, pos).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          pos: Position)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                left / right
            },
            Mod => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                let rem = left % right;
                if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
                    rem + right
                } else {
                    rem
                }
            },
            Pow => left.powf(right),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("'{op}' is not an arithmetic operator"),
                                                        pos });
            },
        };

        Ok(Value::Number(result))
    }
}
