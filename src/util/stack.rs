/// Remaining stack below which a new segment is allocated (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2 MiB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Runs `f`, first growing the stack if less than [`RED_ZONE`] remains.
///
/// Wrap every recursive entry point (statement execution, expression
/// evaluation, nested parsing) with this so that recursion depth is bounded
/// by the interpreter's own call-depth limit rather than by the native stack.
///
/// # Example
/// ```
/// use djerba::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(50_000), 50_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
