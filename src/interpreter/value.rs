/// User-defined function values.
///
/// Defines the `Function` closure type: a name, the parameter names, the
/// body and the environment the definition ran in.
pub mod function;

pub mod core;

/// The shared element vector behind list values.
pub mod list;
