//! Text storage, word wrap and editing.
//!
//! Key types:
//!
//! - [`Buffer`]: rope-backed logical lines addressed by (row, column)
//! - [`Layout`]: the wrapped visual lines of a buffer and both coordinate mappings
//! - [`Cursor`]: logical cursor with soft-wrap aware vertical movement
//! - [`Viewport`]: scroll window of fixed height over the visual lines
//! - [`EditGuard`]: transactional edits with rollback on limit violation
//! - [`TextArea`]: all of the above behind one command API
//!
//! # Examples
//!
//! ## Wrapping a buffer
//!
//! ```
//! use wraptext::text::{Buffer, wrap};
//! use wraptext::WidthMethod;
//!
//! let buffer = Buffer::with_text("foo bar baz");
//! let layout = wrap(&buffer, 5, WidthMethod::WcWidth);
//! let lines: Vec<&str> = layout.lines().iter().map(|l| l.text.as_str()).collect();
//! assert_eq!(lines, vec!["foo ", "bar ", "baz"]);
//! ```
//!
//! ## Typing into a text area
//!
//! ```
//! use wraptext::{LogicalPosition, TextArea, TextAreaOptions};
//!
//! let mut area = TextArea::new(TextAreaOptions::default().with_width(5).with_height(3));
//! for c in "foo bar baz".chars() {
//!     area.insert_char(c);
//! }
//! assert_eq!(area.visual_line_count(), 3);
//! assert_eq!(area.cursor(), LogicalPosition::new(0, 11));
//! ```

mod buffer;
mod command;
mod cursor;
mod guard;
mod rope;
mod textarea;
mod viewport;
mod wrap;

pub use buffer::{Buffer, LogicalPosition};
pub use command::Command;
pub use cursor::{
    Cursor, Direction, next_boundary, prev_boundary, word_end_after, word_left, word_right,
    word_start_before,
};
pub use guard::{EditGuard, Limits};
pub use rope::RowRope;
pub use textarea::TextArea;
pub use viewport::{ScrollDirection, Viewport};
pub use wrap::{Layout, LineInfo, LineSegment, VisualLine, VisualPosition, wrap, wrap_line};
