/// A location in source text.
///
/// Lines and columns both start at 1. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Converts byte offsets of a source string into [`Position`]s.
///
/// The index is built once per source by recording where every line starts.
/// Lookups are a binary search over those starts.
///
/// # Example
/// ```
/// use djerba::util::position::{LineIndex, Position};
///
/// let source = "$a <- 1\n:> $a";
/// let index = LineIndex::new(source);
///
/// assert_eq!(index.position(0), Position::new(1, 1));
/// assert_eq!(index.position(8), Position::new(2, 1));
/// assert_eq!(index.position(11), Position::new(2, 4));
/// ```
pub struct LineIndex<'src> {
    source:      &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    /// Records the start offset of every line in `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0).chain(source.match_indices('\n')
                                                         .map(|(offset, _)| offset + 1))
                                            .collect();
        Self { source,
               line_starts }
    }

    /// Returns the position of the character starting at byte `offset`.
    ///
    /// Offsets past the end of the source map to the position just after the
    /// last character.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;

        Position::new(line, column)
    }
}
