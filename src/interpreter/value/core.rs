use std::{cell::RefCell, collections::HashSet, fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            function::Function,
            list::{ListItems, ListRef},
        },
    },
    util::{position::Position, stack::ensure_sufficient_stack},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
///
/// Lists are shared by reference: cloning a `Value::List` clones the handle,
/// so every clone observes the same elements.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A mutable, ordered list of values.
    List(ListRef),
    /// A user-defined function.
    Function(Rc<Function>),
    /// The absence of a value, returned by functions without `!>`.
    None,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(ListItems::new(v))))
    }
}

impl From<Rc<Function>> for Value {
    fn from(f: Rc<Function>) -> Self {
        Self::Function(f)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Returns the number inside `self`, or a type mismatch naming `what`.
    ///
    /// # Parameters
    /// - `what`: Describes the operand in the error, such as `"operand of
    ///   '-'"` or `"argument to 'sqrt'"`.
    /// - `pos`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use djerba::{interpreter::value::core::Value, util::position::Position};
    ///
    /// let x = Value::Number(10.0);
    /// assert_eq!(x.as_number("x", Position::default()).unwrap(), 10.0);
    ///
    /// let s = Value::from("ten");
    /// assert!(s.as_number("x", Position::default()).is_err());
    /// ```
    pub fn as_number(&self, what: &str, pos: Position) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeMismatch { details: format!("{what} must be a number, found {}",
                                                                       other.type_name()),
                                                      pos }),
        }
    }

    /// Returns the string inside `self`, or a type mismatch naming `what`.
    pub fn as_str(&self, what: &str, pos: Position) -> EvalResult<&str> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(RuntimeError::TypeMismatch { details: format!("{what} must be a string, found {}",
                                                                       other.type_name()),
                                                      pos }),
        }
    }

    /// Returns the list handle inside `self`, or a type mismatch naming
    /// `what`.
    pub fn as_list(&self, what: &str, pos: Position) -> EvalResult<&ListRef> {
        match self {
            Self::List(list) => Ok(list),
            other => Err(RuntimeError::TypeMismatch { details: format!("{what} must be a list, found {}",
                                                                       other.type_name()),
                                                      pos }),
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// `false`, `0`, `""`, `[]` and `none` are falsy; everything else is
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::List(list) => !list.borrow().is_empty(),
            Self::Function(_) => true,
            Self::None => false,
        }
    }

    /// The name `type()` reports for this value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::None => "none",
        }
    }
}

impl PartialEq for Value {
    /// Numbers, strings, booleans and `none` compare by value, lists
    /// elementwise, functions by identity. Different types are never equal.
    ///
    /// Nested lists are walked with a work stack. A pair of lists already
    /// under comparison is taken as equal, so lists that contain themselves
    /// compare without looping.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::value::core::Value;
    ///
    /// let a = Value::from(vec![Value::Number(1.0)]);
    /// let b = Value::from(vec![Value::Number(1.0)]);
    /// for list in [&a, &b] {
    ///     let handle = list.clone();
    ///     if let Value::List(items) = list {
    ///         items.borrow_mut().push(handle);
    ///     }
    /// }
    ///
    /// assert_eq!(a, b);
    /// assert_ne!(a, Value::from(vec![Value::Number(1.0)]));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        let mut visited = HashSet::new();
        let mut pending = vec![(self.clone(), other.clone())];

        while let Some((left, right)) = pending.pop() {
            match (&left, &right) {
                (Self::List(a), Self::List(b)) => {
                    let key = (Rc::as_ptr(a) as usize, Rc::as_ptr(b) as usize);
                    if Rc::ptr_eq(a, b) || !visited.insert(key) {
                        continue;
                    }

                    let (a, b) = (a.borrow(), b.borrow());
                    if a.len() != b.len() {
                        return false;
                    }
                    pending.extend(a.iter().cloned().zip(b.iter().cloned()));
                },
                (left, right) => {
                    if !left.eq_scalar(right) {
                        return false;
                    }
                },
            }
        }
        true
    }
}

impl Value {
    /// Equality for everything except list against list.
    fn eq_scalar(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(list) => write_list(f, list, &mut HashSet::new()),
            Self::Function(func) => write!(f, "<function {}>", func.name),
            Self::None => write!(f, "none"),
        }
    }
}

/// Writes a number the way print shows it.
///
/// Integral values drop the fraction and `-0` prints as `0`. Magnitudes of
/// `1e16` and above, or below `1e-4`, switch to exponent form with a signed
/// two-digit exponent (`1e+300`, `2.5e-07`). Non-finite results print as
/// `nan`, `inf` and `-inf`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "nan");
    }
    if n.is_infinite() {
        return write!(f, "{}", if n > 0.0 { "inf" } else { "-inf" });
    }
    if n == 0.0 {
        return write!(f, "0");
    }
    if (1e-4..1e16).contains(&n.abs()) {
        return write!(f, "{n}");
    }

    let text = format!("{n:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = exponent.strip_prefix('-')
                                 .map_or(("+", exponent), |digits| ("-", digits));
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Writes `list` and its elements, printing `[...]` for a list that is
/// already open further up, so a list holding itself shows as `[1, [...]]`.
fn write_list(f: &mut fmt::Formatter<'_>,
              list: &ListRef,
              open: &mut HashSet<usize>)
              -> fmt::Result {
    let key = Rc::as_ptr(list) as usize;
    if !open.insert(key) {
        return write!(f, "[...]");
    }

    ensure_sufficient_stack(|| {
        write!(f, "[")?;

        for (index, value) in list.borrow().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            match value {
                Value::List(inner) => write_list(f, inner, open)?,
                other => write!(f, "{other}")?,
            }
        }

        write!(f, "]")
    })?;

    open.remove(&key);
    Ok(())
}

/// Renders the values of one print statement as a single line.
///
/// Each value uses its display form and values are separated by one space.
///
/// # Example
/// ```
/// use djerba::interpreter::value::core::{Value, render_line};
///
/// let values = [Value::from("total:"),
///               Value::Number(2.5),
///               Value::from(vec![Value::Number(1.0), Value::Bool(true)])];
///
/// assert_eq!(render_line(&values), "total: 2.5 [1, true]");
/// ```
#[must_use]
pub fn render_line(values: &[Value]) -> String {
    values.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
