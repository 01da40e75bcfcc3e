//! Scroll window over the visual line sequence.

use crate::text::wrap::Layout;
use std::ops::Range;

/// Direction for manual scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A window of `height` consecutive visual lines starting at `offset`.
///
/// The offset always satisfies `offset <= max(0, total - height)` for the
/// `total` passed to the last call that clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    /// Create a viewport at the top. Height is at least 1.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// First visible visual row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Change the height, keeping the offset valid for `total` lines.
    pub fn set_height(&mut self, height: usize, total: usize) {
        self.height = height.max(1);
        self.clamp(total);
    }

    /// Largest valid offset for `total` visual lines.
    #[must_use]
    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.height)
    }

    /// Pull the offset back into range.
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(self.max_offset(total));
    }

    /// Scroll by `n` rows, clamped to the valid range.
    pub fn scroll(&mut self, direction: ScrollDirection, n: usize, total: usize) {
        match direction {
            ScrollDirection::Up => self.scroll_up(n, total),
            ScrollDirection::Down => self.scroll_down(n, total),
        }
    }

    pub fn scroll_up(&mut self, n: usize, total: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.clamp(total);
    }

    pub fn scroll_down(&mut self, n: usize, total: usize) {
        self.offset = self.offset.saturating_add(n);
        self.clamp(total);
    }

    /// Scroll the minimum amount that puts `row` inside the window.
    pub fn ensure_visible(&mut self, row: usize, total: usize) {
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.height {
            self.offset = row + 1 - self.height;
        }
        self.clamp(total);
    }

    /// Jump back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Whether a visual row is inside the window.
    #[must_use]
    pub fn is_visible(&self, row: usize) -> bool {
        (self.offset..self.offset + self.height).contains(&row)
    }

    /// Indices of the visual lines in the window.
    #[must_use]
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        start..(self.offset + self.height).min(total)
    }

    /// Text of the visible lines, padded with empty strings to `height`.
    #[must_use]
    pub fn render(&self, layout: &Layout) -> Vec<String> {
        let mut rows: Vec<String> = layout.lines()[self.visible_range(layout.len())]
            .iter()
            .map(|line| line.text.clone())
            .collect();
        rows.resize(self.height, String::new());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::buffer::Buffer;
    use crate::text::wrap::wrap;
    use crate::unicode::WidthMethod;

    #[test]
    fn test_scroll_clamps() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_down(10, 5);
        assert_eq!(viewport.offset(), 2);
        viewport.scroll_up(10, 5);
        assert_eq!(viewport.offset(), 0);
        // Content shorter than the window never scrolls
        viewport.scroll(ScrollDirection::Down, 1, 2);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_ensure_visible_minimal_scroll() {
        let mut viewport = Viewport::new(3);
        viewport.ensure_visible(5, 10);
        assert_eq!(viewport.offset(), 3);
        assert!(viewport.is_visible(5));
        viewport.ensure_visible(4, 10);
        assert_eq!(viewport.offset(), 3);
        viewport.ensure_visible(1, 10);
        assert_eq!(viewport.offset(), 1);
    }

    #[test]
    fn test_set_height_reclamps() {
        let mut viewport = Viewport::new(1);
        viewport.scroll_down(4, 5);
        assert_eq!(viewport.offset(), 4);
        viewport.set_height(4, 5);
        assert_eq!(viewport.offset(), 1);
        viewport.set_height(0, 5);
        assert_eq!(viewport.height(), 1);
    }

    #[test]
    fn test_render_pads_to_height() {
        let buffer = Buffer::with_text("one\ntwo");
        let layout = wrap(&buffer, 10, WidthMethod::WcWidth);
        let viewport = Viewport::new(4);
        assert_eq!(viewport.render(&layout), vec!["one", "two", "", ""]);
        assert_eq!(viewport.visible_range(layout.len()), 0..2);
    }

    #[test]
    fn test_render_window() {
        let buffer = Buffer::with_text("a\nb\nc\nd");
        let layout = wrap(&buffer, 10, WidthMethod::WcWidth);
        let mut viewport = Viewport::new(2);
        viewport.scroll_down(1, layout.len());
        assert_eq!(viewport.render(&layout), vec!["b", "c"]);
    }
}
