/// Math built-ins.
///
/// Trigonometry, roots, rounding, `min`/`max` and `pow`.
pub mod math;
/// String built-ins: `len`, `upper`, `lower` and `substr`.
pub mod string;
/// List built-ins.
///
/// `append`/`push` and `pop` modify the list in place, so the change is
/// visible through every variable sharing it.
pub mod list;
/// `range`, `type`, `input` and `print`.
pub mod utility;

pub mod core;
