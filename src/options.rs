//! Text area configuration.

use crate::unicode::WidthMethod;

/// Text area construction options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextAreaOptions {
    /// Display columns per visual line. At least 1.
    pub width: usize,
    /// Visible visual rows. At least 1.
    pub height: usize,
    /// Maximum total characters, line breaks included. 0 = unlimited.
    pub char_limit: usize,
    /// Maximum logical lines. 0 = unlimited.
    pub max_lines: usize,
    /// Spaces a tab expands to.
    pub tab_width: usize,
    /// How ambiguous-width characters are measured.
    pub width_method: WidthMethod,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            width: 40,
            height: 6,
            char_limit: 0,
            max_lines: 0,
            tab_width: 4,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl TextAreaOptions {
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_width_method(mut self, width_method: WidthMethod) -> Self {
        self.width_method = width_method;
        self
    }

    /// Copy with width and height raised to at least 1.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
            ..self
        }
    }
}
