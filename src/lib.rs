//! `wraptext` - word-wrap layout core for terminal text areas
//!
//! Turns an unbounded logical text buffer into width-bounded visual lines,
//! keeps a logical cursor consistent across rewraps, windows the result
//! through a scrollable viewport and enforces size limits transactionally.
//!
//! The crate does no I/O. Callers decode input into [`Command`]s (or call the
//! [`TextArea`] methods directly) and read back [`TextArea::rendered_lines`]
//! and [`TextArea::caret_position`].
//!
//! ```
//! use wraptext::{ScrollDirection, TextArea, TextAreaOptions};
//!
//! let mut area = TextArea::new(TextAreaOptions::default().with_width(20).with_height(1));
//! area.insert_str("This is a really long line that should wrap around the text area.");
//! assert_eq!(area.visual_line_count(), 4);
//!
//! area.scroll_viewport(ScrollDirection::Up, 3);
//! assert_eq!(area.rendered_lines(), vec!["This is a really "]);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // TextAreaOptions etc
#![allow(clippy::missing_errors_doc)] // Errors are the Rejection variants
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // bool-returning edits are often ignored

pub mod error;
pub mod event;
pub mod options;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Rejection, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};
pub use options::TextAreaOptions;
pub use text::{
    Buffer, Command, Direction, Layout, LineInfo, LogicalPosition, ScrollDirection, TextArea,
    VisualLine, VisualPosition, wrap,
};
pub use unicode::WidthMethod;
