use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{Context, EvalResult, Signal},
        value::core::Value,
    },
    util::position::Position,
};

impl Context<'_> {
    /// Executes a conditional.
    ///
    /// Both branches run in `env` itself, so assignments to new names inside
    /// a branch stay visible after the conditional.
    pub fn exec_if(&mut self,
                   condition: &Expr,
                   then_branch: &[Statement],
                   else_branch: Option<&[Statement]>,
                   env: &EnvRef)
                   -> EvalResult<Signal> {
        if self.eval(condition, env)?.is_truthy() {
            return self.execute(then_branch, env);
        }

        match else_branch {
            Some(statements) => self.execute(statements, env),
            None => Ok(Signal::Normal),
        }
    }

    /// Executes a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. `break` leaves
    /// the loop, `continue` moves on to the next condition check, and
    /// `!>` is passed on to the caller.
    pub fn exec_while(&mut self,
                      condition: &Expr,
                      body: &[Statement],
                      env: &EnvRef)
                      -> EvalResult<Signal> {
        while self.eval(condition, env)?.is_truthy() {
            match self.execute(body, env)? {
                Signal::Break(_) => break,
                Signal::Normal | Signal::Continue(_) => {},
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }

    /// Executes a for-each loop.
    ///
    /// Lists are iterated over a snapshot taken before the first iteration,
    /// so the body may modify the list without affecting the loop. Strings
    /// are iterated one character at a time. Every iteration runs in a fresh
    /// child of `env` that binds the loop variable.
    ///
    /// # Errors
    /// `TypeMismatch` if the iterable is neither a list nor a string.
    pub fn exec_for_each(&mut self,
                         var: &str,
                         iterable: &Expr,
                         body: &[Statement],
                         env: &EnvRef,
                         pos: Position)
                         -> EvalResult<Signal> {
        let items = match self.eval(iterable, env)? {
            Value::List(list) => list.borrow().to_vec(),
            Value::Str(s) => s.chars().map(|c| Value::from(c.to_string())).collect(),
            other => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot iterate over {}",
                                                                         other.type_name()),
                                                        pos });
            },
        };

        for item in items {
            let scope = Environment::with_parent(env);
            scope.borrow_mut().define(var, item);

            match self.execute(body, &scope)? {
                Signal::Break(_) => break,
                Signal::Normal | Signal::Continue(_) => {},
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }
}
