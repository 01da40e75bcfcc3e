//! Logical text buffer addressed by (row, column).
//!
//! [`Buffer`] is a pure content store: it never checks width or size limits.
//! Every mutation made on behalf of a text area goes through the edit guard,
//! which validates the result and rolls back on violation.

use crate::text::rope::RowRope;

/// Cursor-addressable position in the logical content.
///
/// `col` counts characters (not bytes, not display columns) and may equal the
/// line length, meaning "after the last character".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalPosition {
    pub row: usize,
    pub col: usize,
}

impl LogicalPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The first position of any buffer.
    #[must_use]
    pub const fn start() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Ordered sequence of logical lines, never fewer than one.
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    rope: RowRope,
}

impl Buffer {
    /// Create a buffer holding one empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from text whose only line break is `\n`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RowRope::from_text(text),
        }
    }

    /// Number of logical lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_rows()
    }

    /// Length of a logical line in characters.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.rope.row_len(row)
    }

    /// Content of a logical line.
    #[must_use]
    pub fn line(&self, row: usize) -> String {
        self.rope.row_text(row)
    }

    /// Characters of a logical line.
    #[must_use]
    pub fn line_chars(&self, row: usize) -> Vec<char> {
        self.rope.row_text(row).chars().collect()
    }

    /// Character under a position, `None` at the end of a line.
    #[must_use]
    pub fn char_at(&self, pos: LogicalPosition) -> Option<char> {
        if !self.contains(pos) || pos.col == self.line_len(pos.row) {
            return None;
        }
        self.rope.char_at(self.rope.char_index(pos.row, pos.col))
    }

    /// Whether a position addresses this buffer.
    #[must_use]
    pub fn contains(&self, pos: LogicalPosition) -> bool {
        pos.row < self.line_count() && pos.col <= self.line_len(pos.row)
    }

    /// Nearest valid position.
    #[must_use]
    pub fn clamp(&self, pos: LogicalPosition) -> LogicalPosition {
        let row = pos.row.min(self.line_count() - 1);
        LogicalPosition::new(row, pos.col.min(self.line_len(row)))
    }

    /// Position after the last character.
    #[must_use]
    pub fn end_position(&self) -> LogicalPosition {
        let row = self.line_count() - 1;
        LogicalPosition::new(row, self.line_len(row))
    }

    /// Insert one character; returns the position after it.
    ///
    /// A `\n` is treated as a line break.
    pub fn insert_rune(&mut self, pos: LogicalPosition, c: char) -> LogicalPosition {
        if c == '\n' {
            return self.insert_line_break(pos);
        }
        let pos = self.clamp(pos);
        let idx = self.rope.char_index(pos.row, pos.col);
        let mut tmp = [0u8; 4];
        self.rope.insert(idx, c.encode_utf8(&mut tmp));
        LogicalPosition::new(pos.row, pos.col + 1)
    }

    /// Split the line at `pos`; returns the start of the new line.
    pub fn insert_line_break(&mut self, pos: LogicalPosition) -> LogicalPosition {
        let pos = self.clamp(pos);
        let idx = self.rope.char_index(pos.row, pos.col);
        self.rope.insert(idx, "\n");
        LogicalPosition::new(pos.row + 1, 0)
    }

    /// Insert text that may contain `\n`; returns the position after it.
    pub fn insert_str(&mut self, pos: LogicalPosition, text: &str) -> LogicalPosition {
        let pos = self.clamp(pos);
        let idx = self.rope.char_index(pos.row, pos.col);
        self.rope.insert(idx, text);
        self.position_of(idx + text.chars().count())
    }

    /// Delete the character before `pos`, joining lines at a line start.
    ///
    /// Returns the new position, or `None` at the start of the buffer.
    pub fn delete_backward(&mut self, pos: LogicalPosition) -> Option<LogicalPosition> {
        let idx = self.index_of(pos);
        if idx == 0 {
            return None;
        }
        self.rope.remove(idx - 1..idx);
        Some(self.position_of(idx - 1))
    }

    /// Delete the character at `pos`, joining lines at a line end.
    ///
    /// Returns `false` at the end of the buffer.
    pub fn delete_forward(&mut self, pos: LogicalPosition) -> bool {
        let idx = self.index_of(pos);
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..idx + 1);
        true
    }

    /// Delete everything between two positions; returns the earlier one.
    pub fn delete_range(&mut self, a: LogicalPosition, b: LogicalPosition) -> LogicalPosition {
        let (start, end) = (self.index_of(a.min(b)), self.index_of(a.max(b)));
        self.rope.remove(start..end);
        self.position_of(start)
    }

    /// Replace the text between two positions; returns the position after
    /// the inserted text.
    pub fn replace_range(
        &mut self,
        a: LogicalPosition,
        b: LogicalPosition,
        text: &str,
    ) -> LogicalPosition {
        let start = self.delete_range(a, b);
        self.insert_str(start, text)
    }

    /// Full content with `\n` between lines.
    #[must_use]
    pub fn value(&self) -> String {
        self.rope.to_string()
    }

    /// Character count used for the global limit; line breaks count as one.
    #[must_use]
    pub fn total_char_count(&self) -> usize {
        self.rope.len_chars()
    }

    fn index_of(&self, pos: LogicalPosition) -> usize {
        let pos = self.clamp(pos);
        self.rope.char_index(pos.row, pos.col)
    }

    fn position_of(&self, char_idx: usize) -> LogicalPosition {
        let (row, col) = self.rope.row_col(char_idx);
        LogicalPosition::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_one_line() {
        let buffer = Buffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.value(), "");
        assert_eq!(buffer.end_position(), LogicalPosition::start());
    }

    #[test]
    fn test_insert_rune_advances_column() {
        let mut buffer = Buffer::new();
        let mut pos = LogicalPosition::start();
        for c in "foo".chars() {
            pos = buffer.insert_rune(pos, c);
        }
        assert_eq!(pos, LogicalPosition::new(0, 3));
        assert_eq!(buffer.value(), "foo");
        assert_eq!(buffer.total_char_count(), 3);
    }

    #[test]
    fn test_insert_line_break_splits() {
        let mut buffer = Buffer::with_text("hello world");
        let pos = buffer.insert_line_break(LogicalPosition::new(0, 5));
        assert_eq!(pos, LogicalPosition::new(1, 0));
        assert_eq!(buffer.line(0), "hello");
        assert_eq!(buffer.line(1), " world");
        assert_eq!(buffer.value(), "hello\n world");
        // The line break counts toward the total
        assert_eq!(buffer.total_char_count(), 12);
    }

    #[test]
    fn test_insert_rune_newline_is_line_break() {
        let mut buffer = Buffer::with_text("ab");
        let pos = buffer.insert_rune(LogicalPosition::new(0, 1), '\n');
        assert_eq!(pos, LogicalPosition::new(1, 0));
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_delete_backward_joins_lines() {
        let mut buffer = Buffer::with_text("ab\ncd");
        let pos = buffer.delete_backward(LogicalPosition::new(1, 0));
        assert_eq!(pos, Some(LogicalPosition::new(0, 2)));
        assert_eq!(buffer.value(), "abcd");
        assert_eq!(buffer.delete_backward(LogicalPosition::start()), None);
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut buffer = Buffer::with_text("ab\ncd");
        assert!(buffer.delete_forward(LogicalPosition::new(0, 2)));
        assert_eq!(buffer.value(), "abcd");
        assert!(!buffer.delete_forward(LogicalPosition::new(0, 4)));
    }

    #[test]
    fn test_insert_str_multiline() {
        let mut buffer = Buffer::with_text("[]");
        let pos = buffer.insert_str(LogicalPosition::new(0, 1), "one\ntwo");
        assert_eq!(pos, LogicalPosition::new(1, 3));
        assert_eq!(buffer.value(), "[one\ntwo]");
    }

    #[test]
    fn test_replace_range() {
        let mut buffer = Buffer::with_text("hello world");
        let pos = buffer.replace_range(
            LogicalPosition::new(0, 6),
            LogicalPosition::new(0, 11),
            "WORLD",
        );
        assert_eq!(buffer.value(), "hello WORLD");
        assert_eq!(pos, LogicalPosition::new(0, 11));
    }

    #[test]
    fn test_clamp_and_contains() {
        let buffer = Buffer::with_text("abc\nd");
        assert_eq!(
            buffer.clamp(LogicalPosition::new(9, 9)),
            LogicalPosition::new(1, 1)
        );
        assert!(buffer.contains(LogicalPosition::new(0, 3)));
        assert!(!buffer.contains(LogicalPosition::new(0, 4)));
        assert_eq!(buffer.char_at(LogicalPosition::new(0, 2)), Some('c'));
        assert_eq!(buffer.char_at(LogicalPosition::new(0, 3)), None);
    }
}
