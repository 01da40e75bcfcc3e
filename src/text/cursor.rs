//! Cursor movement across logical and wrapped lines.

use crate::text::buffer::{Buffer, LogicalPosition};
use crate::text::wrap::{Layout, VisualPosition};
use unicode_segmentation::UnicodeSegmentation;

/// Direction of a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One grapheme left, wrapping to the end of the previous line.
    Left,
    /// One grapheme right, wrapping to the start of the next line.
    Right,
    /// One visual line up.
    Up,
    /// One visual line down.
    Down,
    /// Start of the current visual line.
    LineStart,
    /// End of the current visual line.
    LineEnd,
    WordLeft,
    WordRight,
    LogicalLineStart,
    LogicalLineEnd,
    BufferStart,
    BufferEnd,
}

impl Direction {
    /// Whether the move keeps the sticky column.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Authoritative logical cursor plus the sticky display column remembered
/// across consecutive vertical moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: LogicalPosition,
    sticky_col: Option<usize>,
}

impl Cursor {
    /// Create a cursor at a position.
    #[must_use]
    pub const fn new(pos: LogicalPosition) -> Self {
        Self {
            pos,
            sticky_col: None,
        }
    }

    /// Current logical position.
    #[must_use]
    pub const fn position(&self) -> LogicalPosition {
        self.pos
    }

    /// Remembered display column, if a vertical move is in progress.
    #[must_use]
    pub const fn sticky_col(&self) -> Option<usize> {
        self.sticky_col
    }

    /// Place the cursor and forget the sticky column.
    pub fn set_position(&mut self, pos: LogicalPosition) {
        self.pos = pos;
        self.sticky_col = None;
    }

    /// Move in a direction and return the new position.
    ///
    /// Moves that would leave the buffer leave the cursor where it is.
    pub fn move_in(
        &mut self,
        direction: Direction,
        buffer: &Buffer,
        layout: &Layout,
    ) -> LogicalPosition {
        if direction.is_vertical() {
            self.move_vertical(direction == Direction::Down, layout);
            return self.pos;
        }

        let pos = self.pos;
        let next = match direction {
            Direction::Left => step_left(buffer, pos),
            Direction::Right => step_right(buffer, pos),
            Direction::LineStart => {
                let idx = layout.visual_row(pos);
                LogicalPosition::new(pos.row, layout.first_col(idx))
            }
            Direction::LineEnd => {
                let idx = layout.visual_row(pos);
                LogicalPosition::new(pos.row, layout.last_col(idx))
            }
            Direction::WordLeft => word_left(buffer, pos),
            Direction::WordRight => word_right(buffer, pos),
            Direction::LogicalLineStart => LogicalPosition::new(pos.row, 0),
            Direction::LogicalLineEnd => LogicalPosition::new(pos.row, buffer.line_len(pos.row)),
            Direction::BufferStart => LogicalPosition::start(),
            Direction::BufferEnd => buffer.end_position(),
            Direction::Up | Direction::Down => pos,
        };
        self.set_position(next);
        self.pos
    }

    fn move_vertical(&mut self, down: bool, layout: &Layout) {
        let current = layout.to_visual(self.pos);
        let target = if down {
            current.row + 1
        } else if let Some(row) = current.row.checked_sub(1) {
            row
        } else {
            return; // Already at top
        };
        if target >= layout.len() {
            return; // Already at bottom
        }
        let col = *self.sticky_col.get_or_insert(current.col);
        self.pos = layout.to_logical(VisualPosition::new(target, col));
    }
}

/// Character column of the grapheme boundary before `col`.
#[must_use]
pub fn prev_boundary(line: &str, col: usize) -> usize {
    let mut last = 0;
    let mut at = 0;
    for grapheme in line.graphemes(true) {
        if at >= col {
            break;
        }
        last = at;
        at += grapheme.chars().count();
    }
    last
}

/// Character column of the grapheme boundary after `col`.
#[must_use]
pub fn next_boundary(line: &str, col: usize) -> usize {
    let mut at = 0;
    for grapheme in line.graphemes(true) {
        at += grapheme.chars().count();
        if at > col {
            return at;
        }
    }
    at
}

/// Start of the word at or before `col`: skip whitespace, then the word.
#[must_use]
pub fn word_start_before(chars: &[char], col: usize) -> usize {
    let mut idx = col.min(chars.len());
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

/// End of the word at or after `col`: skip whitespace, then the word.
#[must_use]
pub fn word_end_after(chars: &[char], col: usize) -> usize {
    let mut idx = col.min(chars.len());
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    while idx < chars.len() && !chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}

pub(crate) fn step_left(buffer: &Buffer, pos: LogicalPosition) -> LogicalPosition {
    if pos.col > 0 {
        LogicalPosition::new(pos.row, prev_boundary(&buffer.line(pos.row), pos.col))
    } else if pos.row > 0 {
        LogicalPosition::new(pos.row - 1, buffer.line_len(pos.row - 1))
    } else {
        pos
    }
}

pub(crate) fn step_right(buffer: &Buffer, pos: LogicalPosition) -> LogicalPosition {
    if pos.col < buffer.line_len(pos.row) {
        LogicalPosition::new(pos.row, next_boundary(&buffer.line(pos.row), pos.col))
    } else if pos.row + 1 < buffer.line_count() {
        LogicalPosition::new(pos.row + 1, 0)
    } else {
        pos
    }
}

/// Previous word start, crossing to the previous line from column 0.
#[must_use]
pub fn word_left(buffer: &Buffer, pos: LogicalPosition) -> LogicalPosition {
    let pos = if pos.col == 0 && pos.row > 0 {
        LogicalPosition::new(pos.row - 1, buffer.line_len(pos.row - 1))
    } else {
        pos
    };
    let chars = buffer.line_chars(pos.row);
    LogicalPosition::new(pos.row, word_start_before(&chars, pos.col))
}

/// Next word end, crossing to the next line from the line end.
#[must_use]
pub fn word_right(buffer: &Buffer, pos: LogicalPosition) -> LogicalPosition {
    let pos = if pos.col >= buffer.line_len(pos.row) && pos.row + 1 < buffer.line_count() {
        LogicalPosition::new(pos.row + 1, 0)
    } else {
        pos
    };
    let chars = buffer.line_chars(pos.row);
    LogicalPosition::new(pos.row, word_end_after(&chars, pos.col))
}
