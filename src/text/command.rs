//! Decoded edit commands for event-loop driven callers.

use crate::text::cursor::Direction;
use crate::text::viewport::ScrollDirection;

/// One already-decoded input for [`TextArea::apply`](crate::TextArea::apply).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    InsertChar(char),
    /// Paste; truncated to the remaining limits.
    InsertStr(String),
    InsertLineBreak,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteWordForward,
    KillToLineStart,
    KillToLineEnd,
    UppercaseWord,
    LowercaseWord,
    CapitalizeWord,
    Transpose,
    Move(Direction),
    Scroll(ScrollDirection, usize),
    Reset,
}

impl Command {
    /// Whether the command can change content.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        !matches!(self, Self::Move(_) | Self::Scroll(..))
    }
}
