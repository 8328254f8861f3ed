use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an environment. Child scopes and closures hold these.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One scope record: the names defined at this level plus the enclosing
/// scope, if any.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// Creates an empty top-level environment, wrapped for sharing.
    #[must_use]
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment nested inside `parent`.
    #[must_use]
    pub fn with_parent(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { values: HashMap::new(),
                                    parent: Some(Rc::clone(parent)), }))
    }

    /// Binds `name` in this environment, shadowing any outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up from this environment outward.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().define("x", Value::Number(1.0));
    ///
    /// let local = Environment::with_parent(&global);
    /// assert_eq!(local.borrow().get("x"), Some(Value::Number(1.0)));
    /// assert_eq!(local.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        let mut scope = self.parent.clone();
        while let Some(env) = scope {
            let env = env.borrow();
            if let Some(value) = env.values.get(name) {
                return Some(value.clone());
            }
            scope = env.parent.clone();
        }

        None
    }

    /// Assigns to `name`.
    ///
    /// Updates the nearest environment that already defines `name`. When no
    /// enclosing environment does, the name is created in `env` itself.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().define("count", Value::Number(0.0));
    ///
    /// let local = Environment::with_parent(&global);
    /// Environment::assign(&local, "count", Value::Number(1.0));
    /// Environment::assign(&local, "fresh", Value::Bool(true));
    ///
    /// assert_eq!(global.borrow().get("count"), Some(Value::Number(1.0)));
    /// assert_eq!(global.borrow().get("fresh"), None);
    /// assert_eq!(local.borrow().get("fresh"), Some(Value::Bool(true)));
    /// ```
    pub fn assign(env: &EnvRef, name: &str, value: Value) {
        let mut value = value;
        let mut scope = Some(Rc::clone(env));

        while let Some(current) = scope {
            match current.borrow_mut().update(name, value) {
                Ok(()) => return,
                Err(unused) => value = unused,
            }
            scope = current.borrow().parent.clone();
        }

        env.borrow_mut().define(name, value);
    }

    /// Overwrites `name` if it is defined at this level, handing `value`
    /// back otherwise.
    fn update(&mut self, name: &str, value: Value) -> Result<(), Value> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(value),
        }
    }
}
