//! Row/column addressing over the ropey crate.

use ropey::Rope;
use std::fmt;
use std::ops::Range;

/// Rope addressed by logical row and character column.
///
/// Rows are separated by `\n` only (input is sanitized before it gets here).
/// Cloning shares the rope's nodes, so a clone is a cheap snapshot.
#[derive(Clone, Debug, Default)]
pub struct RowRope {
    rope: Rope,
}

impl RowRope {
    /// Create an empty rope with a single empty row.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters, line breaks included.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of rows. An empty rope has one row.
    #[must_use]
    pub fn len_rows(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of characters in a row, excluding its line break.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        if row >= self.len_rows() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Content of a row without its line break.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.len_rows() {
            return String::new();
        }
        let start = self.rope.line_to_char(row);
        self.rope
            .slice(start..start + self.row_len(row))
            .to_string()
    }

    /// Absolute character index of (row, col), clamped into the rope.
    #[must_use]
    pub fn char_index(&self, row: usize, col: usize) -> usize {
        let row = row.min(self.len_rows() - 1);
        self.rope.line_to_char(row) + col.min(self.row_len(row))
    }

    /// (row, col) of an absolute character index.
    #[must_use]
    pub fn row_col(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.len_chars());
        let row = self.rope.char_to_line(char_idx);
        (row, char_idx - self.rope.line_to_char(row))
    }

    /// Character at an absolute index.
    #[must_use]
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// Insert text at an absolute character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let char_idx = char_idx.min(self.len_chars());
        self.rope.insert(char_idx, text);
    }

    /// Remove a range of characters.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let range = range.start.min(len)..range.end.min(len);
        if !range.is_empty() {
            self.rope.remove(range);
        }
    }
}

impl fmt::Display for RowRope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
