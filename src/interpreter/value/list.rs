use std::{
    cell::RefCell,
    ops::{Deref, DerefMut},
    rc::Rc,
};

use crate::interpreter::value::core::Value;

/// Shared handle to the elements of a list value.
pub type ListRef = Rc<RefCell<ListItems>>;

/// The element vector behind a list value.
///
/// Derefs to `Vec<Value>`, so the usual vector methods apply. Dropping the
/// last handle to a list tears its nested lists down with a work stack
/// instead of recursion, so a list nested a few hundred thousand levels deep
/// is freed without exhausting the native stack.
///
/// # Example
/// ```
/// use djerba::interpreter::value::core::Value;
///
/// let mut nested = Value::from(Vec::new());
/// for _ in 0..200_000 {
///     nested = Value::from(vec![nested]);
/// }
/// drop(nested);
/// ```
#[derive(Debug)]
pub struct ListItems(Vec<Value>);

impl ListItems {
    #[must_use]
    pub const fn new(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl Deref for ListItems {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ListItems {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for ListItems {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);

        while let Some(value) = pending.pop() {
            // Lists still shared elsewhere only lose a reference here.
            if let Value::List(list) = value {
                if let Ok(cell) = Rc::try_unwrap(list) {
                    let mut items = cell.into_inner();
                    pending.append(&mut items.0);
                }
            }
        }
    }
}
