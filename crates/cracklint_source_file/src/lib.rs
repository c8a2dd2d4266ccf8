//! Source text helpers: line index and line/column lookup.
//!
//! Derived from `ruff_source_file` by Astral Software Inc., licensed under MIT.

use std::fmt;
use std::num::NonZeroUsize;

use cracklint_text_size::TextSize;

pub use line_index::LineIndex;

mod line_index;

/// A one-based index, used for line and column numbers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    /// The smallest value that can be represented by this integer type.
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    /// Construct a new [`OneIndexed`] from a zero-indexed value.
    pub const fn from_zero_indexed(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    /// Returns the value as a primitive type.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Return the zero-indexed primitive value for this [`OneIndexed`].
    pub const fn to_zero_indexed(self) -> usize {
        self.0.get() - 1
    }
}

impl Default for OneIndexed {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Debug for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OneIndexed").field(&self.get()).finish()
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.get(), f)
    }
}

/// A line and character-based column, both one-indexed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineColumn {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Gives access to the source code of a file and allows mapping between
/// [`TextSize`] offsets and [`LineColumn`] positions.
#[derive(Debug, Clone, Copy)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(content: &'src str, index: &'index LineIndex) -> Self {
        Self {
            text: content,
            index,
        }
    }

    /// Computes the one-indexed line and column for the given offset.
    pub fn line_column(&self, offset: TextSize) -> LineColumn {
        self.index.line_column(offset, self.text)
    }
}
