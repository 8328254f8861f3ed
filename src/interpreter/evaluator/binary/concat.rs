use crate::interpreter::{
    evaluator::core::Context,
    value::{core::Value, list::ListRef},
};

impl Context<'_> {
    /// Joins the display forms of two values into a new string.
    ///
    /// At least one side is expected to be a string; the other is rendered
    /// with the same rule print uses, so `"n=" + 4` is `"n=4"`.
    #[must_use]
    pub fn eval_concat_str(left: &Value, right: &Value) -> Value {
        Value::from(format!("{left}{right}"))
    }

    /// Builds a new list holding the elements of `left` followed by those of
    /// `right`. Neither operand is modified.
    #[must_use]
    pub fn eval_concat_list(left: &ListRef, right: &ListRef) -> Value {
        let mut joined = left.borrow().to_vec();
        joined.extend(right.borrow().iter().cloned());
        Value::from(joined)
    }
}
