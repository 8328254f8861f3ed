use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        host::Host,
        value::{core::Value, function::Function},
    },
    util::{position::Position, stack::ensure_sufficient_stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Blocks stop at the first signal that is not `Normal` and hand it to the
/// construct around them, which either absorbs it or passes it on.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Execution continues with the next statement.
    Normal,
    /// `!>` ran; the enclosing call yields the value.
    Return(Value),
    /// `break` ran at the given position.
    Break(Position),
    /// `continue` ran at the given position.
    Continue(Position),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global environment, every
/// user-defined function, the host that receives output and supplies input,
/// and the current call depth.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::run_program`] executes a
/// parsed program against the global environment.
pub struct Context<'h> {
    /// The outermost environment. Holds `PI`, `E` and top-level variables.
    pub globals:   EnvRef,
    /// User-defined functions by name. Populated as definitions execute;
    /// defining a name again replaces the earlier function.
    pub functions: HashMap<String, Rc<Function>>,
    pub(crate) host: &'h mut dyn Host,
    depth:     usize,
    max_depth: usize,
}

impl<'h> Context<'h> {
    /// Creates a context with the default [`Config`].
    pub fn new(host: &'h mut dyn Host) -> Self {
        Self::with_config(host, &Config::default())
    }

    /// Creates a context whose global environment holds the constants `PI`
    /// and `E`.
    pub fn with_config(host: &'h mut dyn Host, config: &Config) -> Self {
        let globals = Environment::new();
        {
            let mut scope = globals.borrow_mut();
            scope.define("PI", Value::Number(std::f64::consts::PI));
            scope.define("E", Value::Number(std::f64::consts::E));
        }

        Self { globals,
               functions: HashMap::new(),
               host,
               depth: 0,
               max_depth: config.max_call_depth }
    }

    /// Executes a whole program in the global environment.
    ///
    /// A top-level `!>` ends the program early without error.
    ///
    /// # Errors
    /// The first runtime error, including `break` or `continue` outside a
    /// loop.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::{
    ///     evaluator::core::Context,
    ///     host::Host,
    ///     lexer::scan,
    ///     parser::core::parse,
    ///     value::core::{Value, render_line},
    /// };
    ///
    /// #[derive(Default)]
    /// struct Lines(Vec<String>);
    ///
    /// impl Host for Lines {
    ///     fn emit(&mut self, values: &[Value]) {
    ///         self.0.push(render_line(values));
    ///     }
    ///
    ///     fn read_line(&mut self, _prompt: Option<&str>) -> String {
    ///         String::new()
    ///     }
    /// }
    ///
    /// let program = parse(&scan("$x <- 2\n:> $x * 21").unwrap()).unwrap();
    /// let mut host = Lines::default();
    ///
    /// Context::new(&mut host).run_program(&program).unwrap();
    /// assert_eq!(host.0, vec!["42"]);
    /// ```
    pub fn run_program(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let globals = Rc::clone(&self.globals);

        match self.execute(statements, &globals)? {
            Signal::Normal | Signal::Return(_) => Ok(()),
            Signal::Break(pos) => Err(RuntimeError::BreakOrContinueOutsideLoop { keyword: "break",
                                                                                 pos }),
            Signal::Continue(pos) => {
                Err(RuntimeError::BreakOrContinueOutsideLoop { keyword: "continue",
                                                               pos })
            },
        }
    }

    /// Executes a sequence of statements in `env`.
    ///
    /// Stops at the first statement that does not finish normally and
    /// returns its signal.
    pub fn execute(&mut self, statements: &[Statement], env: &EnvRef) -> EvalResult<Signal> {
        for statement in statements {
            match self.exec_statement(statement, env)? {
                Signal::Normal => {},
                signal => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }

    /// Executes a single statement.
    ///
    /// Assignments, prints, definitions and expression statements always
    /// finish normally. Conditionals and loops are delegated to
    /// [`Context::exec_if`], [`Context::exec_while`] and
    /// [`Context::exec_for_each`].
    pub fn exec_statement(&mut self, statement: &Statement, env: &EnvRef) -> EvalResult<Signal> {
        tracing::trace!(pos = %statement.position(), "executing statement");

        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.eval(value, env)?;
                Environment::assign(env, name, value);
                Ok(Signal::Normal)
            },
            Statement::Print { values, .. } => {
                let values = self.eval_all(values, env)?;
                self.host.emit(&values);
                Ok(Signal::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch.as_deref(), env),
            Statement::While { condition, body, .. } => self.exec_while(condition, body, env),
            Statement::ForEach { var,
                                 iterable,
                                 body,
                                 pos, } => self.exec_for_each(var, iterable, body, env, *pos),
            Statement::Function(def) => {
                let function = Rc::new(Function::new(def, Rc::clone(env)));
                self.functions.insert(def.name.clone(), function);
                Ok(Signal::Normal)
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::None,
                };
                Ok(Signal::Return(value))
            },
            Statement::Break { pos } => Ok(Signal::Break(*pos)),
            Statement::Continue { pos } => Ok(Signal::Continue(*pos)),
            Statement::Expression { expr, .. } => {
                self.eval(expr, env)?;
                Ok(Signal::Normal)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. It dispatches
    /// on the expression variant: literals, variables, list literals,
    /// indexing, unary and binary operations, the logical operators and
    /// function calls.
    pub fn eval(&mut self, expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
        ensure_sufficient_stack(|| -> EvalResult<Value> {
            match expr {
                Expr::Literal { value, .. } => Ok(Value::from(value)),
                Expr::Variable { name, pos } => self.eval_variable(name, env, *pos),
                Expr::List { elements, .. } => Ok(Value::from(self.eval_all(elements, env)?)),
                Expr::Index { target, index, pos } => self.eval_index(target, index, env, *pos),
                Expr::Unary { op, operand, pos } => {
                    let value = self.eval(operand, env)?;
                    Self::eval_unary(*op, &value, *pos)
                },
                Expr::Binary { left, op, right, pos } => {
                    let left = self.eval(left, env)?;
                    let right = self.eval(right, env)?;
                    Self::eval_binary(*op, &left, &right, *pos)
                },
                Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right, env),
                Expr::Call { name, arguments, pos } => self.eval_call(name, arguments, env, *pos),
            }
        })
    }

    /// Evaluates expressions left to right.
    pub fn eval_all(&mut self, exprs: &[Expr], env: &EnvRef) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            values.push(self.eval(expr, env)?);
        }
        Ok(values)
    }

    /// Runs `f` one call level deeper.
    ///
    /// # Errors
    /// `StackOverflow` when the configured depth is already reached.
    pub(crate) fn nested<T>(&mut self,
                            pos: Position,
                            f: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::StackOverflow { limit: self.max_depth,
                                                     pos });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Current user-function call depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
