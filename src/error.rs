//! Error types for wraptext.

use std::fmt;

/// Result type alias for wraptext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The size limit an edit would have violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Total character count (line breaks included) would exceed the limit.
    CharLimit { limit: usize, attempted: usize },
    /// Logical line count would exceed the limit.
    MaxLines { limit: usize, attempted: usize },
    /// A visual line would be wider than the configured width.
    LineWidth {
        visual_row: usize,
        width: usize,
        limit: usize,
    },
}

impl Rejection {
    /// Short machine-friendly name, used as the event payload kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CharLimit { .. } => "char_limit",
            Self::MaxLines { .. } => "max_lines",
            Self::LineWidth { .. } => "line_width",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharLimit { limit, attempted } => {
                write!(f, "character limit {limit} exceeded ({attempted} characters)")
            }
            Self::MaxLines { limit, attempted } => {
                write!(f, "line limit {limit} exceeded ({attempted} lines)")
            }
            Self::LineWidth {
                visual_row,
                width,
                limit,
            } => {
                write!(
                    f,
                    "visual line {visual_row} is {width} columns wide (limit {limit})"
                )
            }
        }
    }
}

/// Error type for wraptext operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An edit was rolled back because it violated a size limit.
    Rejected(Rejection),
    /// A logical position does not exist in the buffer.
    InvalidPosition { row: usize, col: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "edit rejected: {rejection}"),
            Self::InvalidPosition { row, col } => {
                write!(f, "position ({row}, {col}) is outside the buffer")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}
