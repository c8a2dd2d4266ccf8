use std::sync::Arc;

use cracklint_text_size::{TextRange, TextSize};

use crate::{LineColumn, OneIndexed};

/// Index for fast [byte offset](TextSize) to [`LineColumn`] conversions.
///
/// Cheap to clone; the line starts are shared.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineIndex {
    inner: Arc<LineIndexInner>,
}

#[derive(Debug, Eq, PartialEq)]
struct LineIndexInner {
    line_starts: Vec<TextSize>,
    ascii: bool,
}

impl LineIndex {
    /// Builds the index for the given source text.
    pub fn from_source_text(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = Vec::with_capacity(text.len() / 88 + 1);
        line_starts.push(TextSize::default());

        // `\r\n` and lone `\r` both terminate a line.
        for pos in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            line_starts.push(TextSize::new(pos as u32 + 1));
        }

        Self {
            inner: Arc::new(LineIndexInner {
                line_starts,
                ascii: text.is_ascii(),
            }),
        }
    }

    /// Returns the one-indexed line and column for the given offset.
    ///
    /// Columns count characters, not bytes.
    pub fn line_column(&self, offset: TextSize, content: &str) -> LineColumn {
        let line = self.line_index(offset);
        let line_start = self.line_starts()[line.to_zero_indexed()];

        let column = if self.inner.ascii {
            usize::from(offset - line_start)
        } else {
            content[TextRange::new(line_start, offset)].chars().count()
        };

        LineColumn {
            line,
            column: OneIndexed::from_zero_indexed(column),
        }
    }

    /// Returns the one-indexed line number containing the given offset.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        match self.line_starts().binary_search(&offset) {
            Ok(row) => OneIndexed::from_zero_indexed(row),
            Err(next_row) => OneIndexed::from_zero_indexed(next_row - 1),
        }
    }

    /// Returns the byte offsets of every line start.
    pub fn line_starts(&self) -> &[TextSize] {
        &self.inner.line_starts
    }
}
