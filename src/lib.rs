//! # djerba
//!
//! djerba is a small, dynamically typed scripting language with a symbolic
//! syntax, interpreted by walking its syntax tree.
//! It supports numbers, strings, booleans, shared mutable lists, closures,
//! loops and a table of built-in functions.
//!
//! ```text
//! @ fibonacci(n) {
//!     ? n <= 1 { !> n }
//!     !> fibonacci(n - 1) + fibonacci(n - 2)
//! }
//! :> fibonacci(10)
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    config::Config,
    error::Error,
    interpreter::{evaluator::core::Context, host::Host, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Settings that shape a run, such as the call depth limit.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// phase has its own error enum and every error carries the source position
/// it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Maps a failed run to its completion [`error::Status`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the host interface.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities: source positions, numeric conversion and stack
/// growth.
pub mod util;

/// Runs a djerba program with the default [`Config`].
///
/// Output and input go through `host`. Anything the program emitted before
/// an error stays emitted.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use djerba::{
///     error::Status,
///     interpreter::{host::Host, value::core::{Value, render_line}},
///     run,
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
/// let mut host = Lines::default();
/// let result = run(":> \"sum:\", 2 + 2", &mut host);
/// assert!(result.is_ok());
/// assert_eq!(host.0, vec!["sum: 4"]);
///
/// // Undefined variable: a runtime failure.
/// let result = run(":> $missing + 1", &mut host);
/// assert_eq!(Status::from(&result), Status::RuntimeFailure);
/// ```
pub fn run(source: &str, host: &mut dyn Host) -> Result<(), Error> {
    run_with_config(source, host, &Config::default())
}

/// Runs a djerba program with explicit settings.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
pub fn run_with_config(source: &str, host: &mut dyn Host, config: &Config) -> Result<(), Error> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;

    let mut context = Context::with_config(host, config);
    context.run_program(&program)?;

    Ok(())
}
