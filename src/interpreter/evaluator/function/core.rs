use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::{
            core::{Context, EvalResult, Signal},
            function::{list, math, string, utility},
        },
        host::Host,
        value::{core::Value, function::Function},
    },
    util::position::Position,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, the host for
/// input and output, and the position of the call. It returns the call's
/// value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value], &mut dyn Host, Position) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a function.
///
/// `max` of `None` means any number of arguments from `min` upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    /// The fewest arguments accepted.
    pub min: usize,
    /// The most arguments accepted, if bounded.
    pub max: Option<usize>,
}

impl Arity {
    /// Exactly `n` arguments.
    #[must_use]
    pub const fn exact(n: usize) -> Self {
        Self { min: n,
               max: Some(n), }
    }

    /// Between `min` and `max` arguments, inclusive.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self { min,
               max: Some(max) }
    }

    /// `min` or more arguments.
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::between(1, 3).check(2));
    /// assert!(!Arity::exact(1).check(0));
    /// assert!(Arity::at_least(1).check(12));
    /// ```
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        n >= self.min
        && match self.max {
            Some(max) => n <= max,
            None => true,
        }
    }

    /// Builds the error for a call to `name` with `found` arguments.
    #[must_use]
    pub fn mismatch(&self, name: &str, found: usize, pos: Position) -> RuntimeError {
        RuntimeError::ArityMismatch { name: name.to_string(),
                                      expected: self.to_string(),
                                      found,
                                      pos }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{} to {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin table.
        pub struct BuiltinDef {
            /// The name programs call the builtin by.
            pub name:  &'static str,
            /// The accepted argument counts.
            pub arity: Arity,
            /// The implementation.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "sin"    => { arity: Arity::exact(1), func: math::sin },
    "cos"    => { arity: Arity::exact(1), func: math::cos },
    "tan"    => { arity: Arity::exact(1), func: math::tan },
    "sqrt"   => { arity: Arity::exact(1), func: math::sqrt },
    "abs"    => { arity: Arity::exact(1), func: math::abs },
    "floor"  => { arity: Arity::exact(1), func: math::floor },
    "ceil"   => { arity: Arity::exact(1), func: math::ceil },
    "round"  => { arity: Arity::exact(1), func: math::round },
    "min"    => { arity: Arity::at_least(1), func: |args, _, pos| math::min_max("min", args, pos) },
    "max"    => { arity: Arity::at_least(1), func: |args, _, pos| math::min_max("max", args, pos) },
    "pow"    => { arity: Arity::exact(2), func: math::pow },
    "len"    => { arity: Arity::exact(1), func: string::len },
    "upper"  => { arity: Arity::exact(1), func: string::upper },
    "lower"  => { arity: Arity::exact(1), func: string::lower },
    "substr" => { arity: Arity::between(2, 3), func: string::substr },
    "append" => { arity: Arity::exact(2), func: list::append },
    "push"   => { arity: Arity::exact(2), func: list::append },
    "pop"    => { arity: Arity::exact(1), func: list::pop },
    "range"  => { arity: Arity::between(1, 3), func: utility::range },
    "type"   => { arity: Arity::exact(1), func: utility::type_of },
    "input"  => { arity: Arity::between(0, 1), func: utility::input },
    "print"  => { arity: Arity::at_least(0), func: utility::print },
}

/// Finds the builtin registered under `name`.
///
/// # Example
/// ```
/// use djerba::interpreter::evaluator::function::core::{Arity, builtin};
///
/// assert_eq!(builtin("substr").map(|def| def.arity), Some(Arity::between(2, 3)));
/// assert!(builtin("fibonacci").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|def| def.name == name)
}

/// What a call expression resolved to.
enum Callee {
    User(Rc<Function>),
    Builtin(&'static BuiltinDef),
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The name is resolved before any argument is evaluated, in this order:
    /// 1. the user-defined functions,
    /// 2. a variable holding a function value,
    /// 3. the builtins.
    ///
    /// Arguments are then evaluated left to right, the argument count is
    /// checked, and the function runs.
    ///
    /// # Errors
    /// - `UndefinedFunction` if the name resolves to nothing callable.
    /// - `ArityMismatch` on a wrong number of arguments.
    /// - Any error raised by the function itself.
    pub fn eval_call(&mut self,
                     name: &str,
                     arguments: &[Expr],
                     env: &EnvRef,
                     pos: Position)
                     -> EvalResult<Value> {
        let callee = self.resolve_callee(name, env, pos)?;
        let args = self.eval_all(arguments, env)?;

        match callee {
            Callee::User(function) => self.call_function(&function, args, pos),
            Callee::Builtin(def) => {
                if !def.arity.check(args.len()) {
                    return Err(def.arity.mismatch(def.name, args.len(), pos));
                }
                (def.func)(&args, &mut *self.host, pos)
            },
        }
    }

    fn resolve_callee(&self, name: &str, env: &EnvRef, pos: Position) -> EvalResult<Callee> {
        if let Some(function) = self.functions.get(name) {
            return Ok(Callee::User(Rc::clone(function)));
        }
        if let Some(Value::Function(function)) = env.borrow().get(name) {
            return Ok(Callee::User(function));
        }
        builtin(name).map(Callee::Builtin)
                     .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                      pos })
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound positionally in a new environment whose parent is
    /// the environment captured at definition time. The body's `!>` value is
    /// the result; a body that finishes without one yields `none`.
    ///
    /// # Errors
    /// - `ArityMismatch` if `args` does not match the parameter count.
    /// - `StackOverflow` if the call would exceed the depth limit.
    /// - `BreakOrContinueOutsideLoop` if `break` or `continue` escapes the
    ///   body.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %function.name, depth = self.depth()))]
    pub fn call_function(&mut self,
                         function: &Rc<Function>,
                         args: Vec<Value>,
                         pos: Position)
                         -> EvalResult<Value> {
        if args.len() != function.arity() {
            return Err(Arity::exact(function.arity()).mismatch(&function.name, args.len(), pos));
        }

        let scope = Environment::with_parent(&function.closure);
        {
            let mut scope = scope.borrow_mut();
            for (param, arg) in function.params.iter().zip(args) {
                scope.define(param.clone(), arg);
            }
        }

        let signal = self.nested(pos, |ctx| ctx.execute(&function.body, &scope))?;

        match signal {
            Signal::Normal => Ok(Value::None),
            Signal::Return(value) => Ok(value),
            Signal::Break(pos) => Err(RuntimeError::BreakOrContinueOutsideLoop { keyword: "break",
                                                                                 pos }),
            Signal::Continue(pos) => {
                Err(RuntimeError::BreakOrContinueOutsideLoop { keyword: "continue",
                                                               pos })
            },
        }
    }
}
