use crate::{
    ast::{Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::{num::index_checked, position::Position},
};

impl Context<'_> {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. The environment chain starting at `env`.
    /// 2. The user-defined functions, yielding the function as a value.
    ///
    /// If the name is found in neither, an `UndefinedVariable` error is
    /// returned.
    pub fn eval_variable(&self, name: &str, env: &EnvRef, pos: Position) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        self.functions
            .get(name)
            .map(|function| Value::Function(function.clone()))
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             pos })
    }

    /// Evaluates an indexing expression.
    ///
    /// The target must evaluate to a list or a string and the index to an
    /// integer-valued number. Indexing a string yields a one-character
    /// string.
    ///
    /// # Errors
    /// - `TypeMismatch` if the target is not indexable or the index is not an
    ///   integer.
    /// - `IndexOutOfBounds` if the index is negative or past the end.
    pub fn eval_index(&mut self,
                      target: &Expr,
                      index: &Expr,
                      env: &EnvRef,
                      pos: Position)
                      -> EvalResult<Value> {
        let target = self.eval(target, env)?;
        let index = self.eval(index, env)?.as_number("an index", pos)?;

        match &target {
            Value::List(list) => {
                let list = list.borrow();
                let i = index_checked(index, list.len(), pos)?;
                Ok(list[i].clone())
            },
            Value::Str(s) => {
                let len = s.chars().count();
                let i = index_checked(index, len, pos)?;
                Ok(s.chars().nth(i).map_or(Value::None, |c| Value::from(c.to_string())))
            },
            other => Err(RuntimeError::TypeMismatch { details: format!("cannot index into {}",
                                                                       other.type_name()),
                                                      pos }),
        }
    }

    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the result. The result is always a boolean.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr,
                        env: &EnvRef)
                        -> EvalResult<Value> {
        let left = self.eval(left, env)?.is_truthy();

        let result = match (op, left) {
            (LogicalOperator::And, false) => false,
            (LogicalOperator::Or, true) => true,
            _ => self.eval(right, env)?.is_truthy(),
        };

        Ok(Value::Bool(result))
    }
}
