/// Call depth allowed when no other limit is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Settings for one interpreter run.
///
/// # Example
/// ```
/// use djerba::config::{Config, DEFAULT_MAX_CALL_DEPTH};
///
/// let config = Config::default();
/// assert_eq!(config.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
///
/// let shallow = Config::default().with_max_call_depth(64);
/// assert_eq!(shallow.max_call_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How deeply user-defined function calls may nest before the run fails
    /// with a stack overflow.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

impl Config {
    /// Returns `self` with a different call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
