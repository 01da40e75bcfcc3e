//! Multi-line text area core: buffer, wrap, cursor, viewport and limits.

use crate::error::{Error, Rejection, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::options::TextAreaOptions;
use crate::text::buffer::{Buffer, LogicalPosition};
use crate::text::command::Command;
use crate::text::cursor::{
    Cursor, Direction, step_left, step_right, word_end_after, word_left, word_right,
};
use crate::text::guard::{EditGuard, Limits};
use crate::text::viewport::{ScrollDirection, Viewport};
use crate::text::wrap::{Layout, LineInfo, VisualPosition, wrap};
use crate::unicode::{WidthMethod, clusters, sanitize};
use unicode_segmentation::UnicodeSegmentation;

/// Word-wrapping text area driven by discrete edit commands.
///
/// The logical cursor is the only authoritative position. Visual positions
/// are derived from the current [`Layout`], which is rebuilt after every
/// committed edit and every configuration change. Every content mutation is
/// transactional: an edit that would break a limit leaves the content and
/// cursor exactly as they were.
///
/// Mutating methods come in two forms. `try_*` returns the [`Rejection`]
/// wrapped in an [`Error`]; the plain form reports acceptance as a `bool`.
#[derive(Clone, Debug)]
pub struct TextArea {
    buffer: Buffer,
    layout: Layout,
    cursor: Cursor,
    viewport: Viewport,
    guard: EditGuard,
    options: TextAreaOptions,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new(TextAreaOptions::default())
    }
}

impl TextArea {
    /// Create an empty text area.
    #[must_use]
    pub fn new(options: TextAreaOptions) -> Self {
        let options = options.normalized();
        let buffer = Buffer::new();
        let layout = wrap(&buffer, options.width, options.width_method);
        Self {
            buffer,
            layout,
            cursor: Cursor::default(),
            viewport: Viewport::new(options.height),
            guard: EditGuard::new(limits_of(&options), options.width_method),
            options,
        }
    }

    // ---- Configuration ----

    #[must_use]
    pub fn options(&self) -> &TextAreaOptions {
        &self.options
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.options.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.viewport.height()
    }

    #[must_use]
    pub fn char_limit(&self) -> usize {
        self.options.char_limit
    }

    #[must_use]
    pub fn max_lines(&self) -> usize {
        self.options.max_lines
    }

    /// Set the wrap width (at least 1) and rewrap.
    ///
    /// Content is never changed. A cluster wider than the new width keeps a
    /// visual line of its own that exceeds it, and later edits may not add
    /// another such line.
    pub fn set_width(&mut self, width: usize) {
        self.options.width = width.max(1);
        emit_log_with(LogLevel::Debug, || {
            format!("width set to {}", self.options.width)
        });
        self.relayout();
    }

    /// Set the number of visible rows (at least 1).
    pub fn set_height(&mut self, height: usize) {
        self.options.height = height.max(1);
        emit_log_with(LogLevel::Debug, || {
            format!("height set to {}", self.options.height)
        });
        self.viewport.set_height(self.options.height, self.layout.len());
        self.ensure_cursor_visible();
    }

    /// Set the character limit. Existing content is never truncated.
    pub fn set_char_limit(&mut self, char_limit: usize) {
        self.options.char_limit = char_limit;
        emit_log_with(LogLevel::Debug, || format!("char limit set to {char_limit}"));
        self.relayout();
    }

    /// Set the logical line limit. Existing content is never truncated.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.options.max_lines = max_lines;
        emit_log_with(LogLevel::Debug, || format!("max lines set to {max_lines}"));
        self.relayout();
    }

    pub fn set_width_method(&mut self, method: WidthMethod) {
        self.options.width_method = method;
        emit_log_with(LogLevel::Debug, || format!("width method set to {method:?}"));
        self.relayout();
    }

    /// Set how many spaces a tab expands to on future inserts.
    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.options.tab_width = tab_width;
        emit_log_with(LogLevel::Debug, || format!("tab width set to {tab_width}"));
    }

    fn relayout(&mut self) {
        self.guard = EditGuard::new(limits_of(&self.options), self.options.width_method);
        self.layout = wrap(&self.buffer, self.options.width, self.options.width_method);
        self.viewport.clamp(self.layout.len());
        self.ensure_cursor_visible();
    }

    // ---- Introspection ----

    /// Full content with `\n` between logical lines.
    #[must_use]
    pub fn value(&self) -> String {
        self.buffer.value()
    }

    /// Total characters, line breaks included.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.buffer.total_char_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.char_count() == 0
    }

    /// Logical cursor position.
    #[must_use]
    pub fn cursor(&self) -> LogicalPosition {
        self.cursor.position()
    }

    /// Number of logical lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    #[must_use]
    pub fn visual_line_count(&self) -> usize {
        self.layout.len()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.viewport.offset()
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Where the cursor sits within its wrapped logical line.
    #[must_use]
    pub fn line_info(&self) -> LineInfo {
        self.layout.line_info(self.cursor())
    }

    /// Cursor position in the full visual line sequence.
    #[must_use]
    pub fn cursor_visual_position(&self) -> VisualPosition {
        self.layout.to_visual(self.cursor())
    }

    /// Cursor position relative to the rendered window, if it is visible.
    #[must_use]
    pub fn caret_position(&self) -> Option<VisualPosition> {
        let pos = self.cursor_visual_position();
        self.viewport
            .is_visible(pos.row)
            .then(|| VisualPosition::new(pos.row - self.viewport.offset(), pos.col))
    }

    /// Exactly `height` rows: the visible visual lines, then blank padding.
    #[must_use]
    pub fn rendered_lines(&self) -> Vec<String> {
        self.viewport.render(&self.layout)
    }

    // ---- Cursor and viewport ----

    /// Move the cursor and scroll it into view.
    pub fn move_cursor(&mut self, direction: Direction) -> LogicalPosition {
        let pos = self.cursor.move_in(direction, &self.buffer, &self.layout);
        self.ensure_cursor_visible();
        pos
    }

    /// Place the cursor, clamping to the nearest valid position.
    pub fn set_cursor(&mut self, pos: LogicalPosition) {
        self.cursor.set_position(self.buffer.clamp(pos));
        self.ensure_cursor_visible();
    }

    /// Place the cursor, failing if the position is outside the buffer.
    pub fn try_set_cursor(&mut self, pos: LogicalPosition) -> Result<()> {
        if !self.buffer.contains(pos) {
            return Err(Error::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set_cursor(pos);
        Ok(())
    }

    /// Scroll manually. The cursor is not moved.
    pub fn scroll_viewport(&mut self, direction: ScrollDirection, n: usize) {
        self.viewport.scroll(direction, n, self.layout.len());
    }

    fn ensure_cursor_visible(&mut self) {
        let row = self.layout.visual_row(self.cursor());
        self.viewport.ensure_visible(row, self.layout.len());
    }

    // ---- Editing ----

    /// Run a guarded edit; on commit move the cursor to the returned position.
    fn edit<F>(&mut self, edit: F) -> Result<LogicalPosition>
    where
        F: FnOnce(&mut Buffer) -> LogicalPosition,
    {
        let pos = self.guard.apply(&mut self.buffer, &mut self.layout, edit)?;
        self.cursor.set_position(pos);
        self.ensure_cursor_visible();
        Ok(pos)
    }

    /// Insert one character at the cursor.
    ///
    /// Returns `Ok(false)` when the character sanitizes to nothing.
    pub fn try_insert_char(&mut self, c: char) -> Result<bool> {
        let mut tmp = [0u8; 4];
        let text = sanitize(c.encode_utf8(&mut tmp), self.options.tab_width);
        if text.is_empty() {
            return Ok(false);
        }
        let pos = self.cursor();
        self.edit(|b| b.insert_str(pos, &text))?;
        Ok(true)
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        matches!(self.try_insert_char(c), Ok(true))
    }

    /// Paste text at the cursor as one edit; returns the characters inserted.
    ///
    /// Line breaks past the line limit are dropped and the text around them
    /// joined. What remains is cut at a grapheme boundary to fit the
    /// character limit.
    pub fn try_insert_str(&mut self, text: &str) -> Result<usize> {
        let text = sanitize(text, self.options.tab_width);
        if text.is_empty() {
            return Ok(0);
        }
        let text = self.fit(&text, self.buffer.total_char_count(), self.buffer.line_count())?;
        let pos = self.cursor();
        self.edit(|b| b.insert_str(pos, &text))?;
        Ok(text.chars().count())
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        matches!(self.try_insert_str(text), Ok(n) if n > 0)
    }

    pub fn try_insert_line_break(&mut self) -> Result<()> {
        let pos = self.cursor();
        self.edit(|b| b.insert_line_break(pos))?;
        Ok(())
    }

    pub fn insert_line_break(&mut self) -> bool {
        self.try_insert_line_break().is_ok()
    }

    /// Replace the whole content, truncated like a paste into an empty area.
    ///
    /// The cursor moves to the end of the content.
    pub fn try_set_value(&mut self, value: &str) -> Result<()> {
        let text = sanitize(value, self.options.tab_width);
        let text = if text.is_empty() {
            text
        } else {
            self.fit(&text, 0, 1)?
        };
        self.edit(|b| {
            *b = Buffer::with_text(&text);
            b.end_position()
        })?;
        self.viewport.reset();
        self.ensure_cursor_visible();
        Ok(())
    }

    pub fn set_value(&mut self, value: &str) -> bool {
        self.try_set_value(value).is_ok()
    }

    /// Empty the buffer and reset cursor and scroll.
    pub fn try_reset(&mut self) -> Result<()> {
        self.edit(|b| {
            *b = Buffer::new();
            LogicalPosition::start()
        })?;
        self.viewport.reset();
        Ok(())
    }

    pub fn reset(&mut self) -> bool {
        self.try_reset().is_ok()
    }

    /// Delete the grapheme before the cursor, joining lines at a line start.
    pub fn try_delete_backward(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let start = step_left(&self.buffer, pos);
        self.delete_between(start, pos)
    }

    pub fn delete_backward(&mut self) -> bool {
        matches!(self.try_delete_backward(), Ok(true))
    }

    /// Delete the grapheme under the cursor, joining lines at a line end.
    pub fn try_delete_forward(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let end = step_right(&self.buffer, pos);
        self.delete_between(pos, end)
    }

    pub fn delete_forward(&mut self) -> bool {
        matches!(self.try_delete_forward(), Ok(true))
    }

    pub fn try_delete_word_backward(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let start = word_left(&self.buffer, pos);
        self.delete_between(start, pos)
    }

    pub fn delete_word_backward(&mut self) -> bool {
        matches!(self.try_delete_word_backward(), Ok(true))
    }

    pub fn try_delete_word_forward(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let end = word_right(&self.buffer, pos);
        self.delete_between(pos, end)
    }

    pub fn delete_word_forward(&mut self) -> bool {
        matches!(self.try_delete_word_forward(), Ok(true))
    }

    /// Delete from the start of the logical line to the cursor.
    pub fn try_kill_to_line_start(&mut self) -> Result<bool> {
        let pos = self.cursor();
        self.delete_between(LogicalPosition::new(pos.row, 0), pos)
    }

    pub fn kill_to_line_start(&mut self) -> bool {
        matches!(self.try_kill_to_line_start(), Ok(true))
    }

    /// Delete from the cursor to the end of the logical line, or join the
    /// next line when already at the end.
    pub fn try_kill_to_line_end(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let len = self.buffer.line_len(pos.row);
        if pos.col >= len {
            return self.try_delete_forward();
        }
        self.delete_between(pos, LogicalPosition::new(pos.row, len))
    }

    pub fn kill_to_line_end(&mut self) -> bool {
        matches!(self.try_kill_to_line_end(), Ok(true))
    }

    fn delete_between(&mut self, start: LogicalPosition, end: LogicalPosition) -> Result<bool> {
        if start == end {
            return Ok(false);
        }
        self.edit(|b| b.delete_range(start, end))?;
        Ok(true)
    }

    pub fn try_uppercase_word(&mut self) -> Result<bool> {
        self.transform_word(|word| word.to_uppercase())
    }

    pub fn uppercase_word(&mut self) -> bool {
        matches!(self.try_uppercase_word(), Ok(true))
    }

    pub fn try_lowercase_word(&mut self) -> Result<bool> {
        self.transform_word(|word| word.to_lowercase())
    }

    pub fn lowercase_word(&mut self) -> bool {
        matches!(self.try_lowercase_word(), Ok(true))
    }

    pub fn try_capitalize_word(&mut self) -> Result<bool> {
        self.transform_word(capitalize)
    }

    pub fn capitalize_word(&mut self) -> bool {
        matches!(self.try_capitalize_word(), Ok(true))
    }

    /// Replace the cursor..word-end span of the logical line with
    /// `transform` of it and move the cursor past the result.
    fn transform_word<F>(&mut self, transform: F) -> Result<bool>
    where
        F: FnOnce(&str) -> String,
    {
        let pos = self.cursor();
        let chars = self.buffer.line_chars(pos.row);
        let end = word_end_after(&chars, pos.col);
        if end <= pos.col {
            return Ok(false);
        }
        let word: String = chars[pos.col..end].iter().collect();
        let replaced = transform(&word);
        let end = LogicalPosition::new(pos.row, end);
        self.edit(|b| b.replace_range(pos, end, &replaced))?;
        Ok(true)
    }

    /// Swap the grapheme clusters on either side of the cursor, or the last
    /// two clusters when the cursor is at the end of the line.
    pub fn try_transpose(&mut self) -> Result<bool> {
        let pos = self.cursor();
        let chars = self.buffer.line_chars(pos.row);
        let line: String = chars.iter().collect();
        let parts = clusters(&line, self.options.width_method);
        if pos.col == 0 || parts.len() < 2 {
            return Ok(false);
        }
        let idx = parts
            .iter()
            .position(|c| c.col >= pos.col)
            .unwrap_or(parts.len())
            .clamp(1, parts.len() - 1);
        let (left, right) = (parts[idx - 1], parts[idx]);
        let swapped: String = chars[right.col..right.end()]
            .iter()
            .chain(&chars[left.col..left.end()])
            .collect();
        self.edit(|b| {
            b.replace_range(
                LogicalPosition::new(pos.row, left.col),
                LogicalPosition::new(pos.row, right.end()),
                &swapped,
            )
        })?;
        Ok(true)
    }

    pub fn transpose(&mut self) -> bool {
        matches!(self.try_transpose(), Ok(true))
    }

    /// Shrink sanitized text to what the limits still allow.
    fn fit(&self, text: &str, chars: usize, lines: usize) -> Result<String> {
        let limits = self.guard.limits();
        let mut out = text.to_string();

        if let Some(budget) = limits.line_budget(lines) {
            let mut kept = 0;
            out.retain(|c| {
                if c != '\n' {
                    return true;
                }
                kept += 1;
                kept <= budget
            });
            if out.is_empty() {
                return Err(self.guard.reject(Rejection::MaxLines {
                    limit: limits.max_lines,
                    attempted: lines + text.matches('\n').count(),
                }));
            }
        }

        if let Some(budget) = limits.char_budget(chars) {
            out = truncate_graphemes(&out, budget);
            if out.is_empty() {
                return Err(self.guard.reject(Rejection::CharLimit {
                    limit: limits.char_limit,
                    attempted: chars + text.chars().count(),
                }));
            }
        }

        Ok(out)
    }

    // ---- Command dispatch ----

    /// Apply a decoded command; returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::InsertChar(c) => self.insert_char(c),
            Command::InsertStr(text) => self.insert_str(&text),
            Command::InsertLineBreak => self.insert_line_break(),
            Command::DeleteBackward => self.delete_backward(),
            Command::DeleteForward => self.delete_forward(),
            Command::DeleteWordBackward => self.delete_word_backward(),
            Command::DeleteWordForward => self.delete_word_forward(),
            Command::KillToLineStart => self.kill_to_line_start(),
            Command::KillToLineEnd => self.kill_to_line_end(),
            Command::UppercaseWord => self.uppercase_word(),
            Command::LowercaseWord => self.lowercase_word(),
            Command::CapitalizeWord => self.capitalize_word(),
            Command::Transpose => self.transpose(),
            Command::Move(direction) => {
                let before = self.cursor();
                self.move_cursor(direction) != before
            }
            Command::Scroll(direction, n) => {
                let before = self.scroll_offset();
                self.scroll_viewport(direction, n);
                self.scroll_offset() != before
            }
            Command::Reset => {
                let changed = !self.is_empty();
                self.reset();
                changed
            }
        }
    }
}

fn limits_of(options: &TextAreaOptions) -> Limits {
    Limits {
        width: options.width,
        char_limit: options.char_limit,
        max_lines: options.max_lines,
    }
}

fn capitalize(word: &str) -> String {
    let mut seen = false;
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_whitespace() {
            out.push(c);
        } else if seen {
            out.extend(c.to_lowercase());
        } else {
            seen = true;
            out.extend(c.to_uppercase());
        }
    }
    out
}

/// Longest grapheme-aligned prefix of at most `budget` characters.
fn truncate_graphemes(text: &str, budget: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for grapheme in text.graphemes(true) {
        let len = grapheme.chars().count();
        if used + len > budget {
            break;
        }
        used += len;
        out.push_str(grapheme);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: usize, height: usize) -> TextArea {
        TextArea::new(
            TextAreaOptions::default()
                .with_width(width)
                .with_height(height),
        )
    }

    fn type_str(area: &mut TextArea, text: &str) {
        for c in text.chars() {
            area.insert_char(c);
        }
    }

    #[test]
    fn test_new_is_empty() {
        let area = TextArea::default();
        assert!(area.is_empty());
        assert_eq!(area.line_count(), 1);
        assert_eq!(area.visual_line_count(), 1);
        assert_eq!(area.rendered_lines().len(), 6);
        assert_eq!(area.caret_position(), Some(VisualPosition::new(0, 0)));
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        let mut area = area(0, 0);
        assert_eq!(area.width(), 1);
        assert_eq!(area.height(), 1);
        area.set_width(0);
        area.set_height(0);
        assert_eq!(area.width(), 1);
        assert_eq!(area.height(), 1);
    }

    #[test]
    fn test_insert_char_and_line_break() {
        let mut area = area(20, 3);
        type_str(&mut area, "ab");
        assert!(area.insert_line_break());
        type_str(&mut area, "cd");
        assert_eq!(area.value(), "ab\ncd");
        assert_eq!(area.cursor(), LogicalPosition::new(1, 2));
    }

    #[test]
    fn test_control_char_not_accepted() {
        let mut area = area(20, 3);
        assert!(!area.insert_char('\u{7}'));
        assert!(area.insert_char('\t'));
        assert_eq!(area.value(), "    ");
    }

    #[test]
    fn test_char_limit_rejects_typing() {
        let mut area = TextArea::new(TextAreaOptions::default().with_char_limit(3));
        type_str(&mut area, "abcd");
        assert_eq!(area.value(), "abc");
        assert!(matches!(
            area.try_insert_char('x'),
            Err(Error::Rejected(Rejection::CharLimit { .. }))
        ));
        assert_eq!(area.cursor(), LogicalPosition::new(0, 3));
    }

    #[test]
    fn test_paste_truncates_to_budget() {
        let mut area = TextArea::new(TextAreaOptions::default().with_char_limit(6));
        type_str(&mut area, "ab");
        assert_eq!(area.try_insert_str("cdefgh").unwrap(), 4);
        assert_eq!(area.value(), "abcdef");
        assert!(matches!(
            area.try_insert_str("x"),
            Err(Error::Rejected(Rejection::CharLimit { .. }))
        ));
    }

    #[test]
    fn test_paste_never_splits_cluster() {
        let mut area = TextArea::new(TextAreaOptions::default().with_char_limit(2));
        assert_eq!(area.try_insert_str("ae\u{0301}").unwrap(), 1);
        assert_eq!(area.value(), "a");
    }

    #[test]
    fn test_paste_joins_excess_line_breaks() {
        let mut area = TextArea::new(TextAreaOptions::default().with_max_lines(2));
        assert!(area.insert_str("one\ntwo\nthree"));
        assert_eq!(area.value(), "one\ntwothree");
        assert!(!area.insert_line_break());
        assert!(matches!(
            area.try_insert_str("\n"),
            Err(Error::Rejected(Rejection::MaxLines { .. }))
        ));
    }

    #[test]
    fn test_set_value_and_reset() {
        let mut area = TextArea::new(
            TextAreaOptions::default()
                .with_width(10)
                .with_height(2)
                .with_char_limit(12),
        );
        assert!(area.set_value("line one\r\nline two\nline three"));
        assert_eq!(area.value(), "line one\nlin");
        assert_eq!(area.cursor(), LogicalPosition::new(1, 3));

        area.reset();
        assert_eq!(area.value(), "");
        assert_eq!(area.cursor(), LogicalPosition::start());
        assert_eq!(area.scroll_offset(), 0);
    }

    #[test]
    fn test_reset_commits_under_tightened_limits() {
        let mut area = area(4, 2);
        area.set_value("one\ntwo\nthree four");
        area.move_cursor(Direction::Up);
        area.set_max_lines(1);
        area.set_char_limit(2);

        assert_eq!(area.try_reset(), Ok(()));
        assert!(area.is_empty());
        assert_eq!(area.visual_line_count(), 1);
        assert_eq!(area.cursor(), LogicalPosition::start());
        assert_eq!(area.cursor_visual_position(), VisualPosition::new(0, 0));
        assert_eq!(area.scroll_offset(), 0);
    }

    #[test]
    fn test_delete_backward_forward() {
        let mut area = area(20, 3);
        area.set_value("ab\ncd");
        assert!(area.delete_backward());
        assert_eq!(area.value(), "ab\nc");
        area.set_cursor(LogicalPosition::new(1, 0));
        assert!(area.delete_backward());
        assert_eq!(area.value(), "abc");
        assert_eq!(area.cursor(), LogicalPosition::new(0, 2));
        assert!(area.delete_forward());
        assert!(!area.delete_forward());
        assert_eq!(area.value(), "ab");
        area.set_cursor(LogicalPosition::start());
        assert!(!area.delete_backward());
    }

    #[test]
    fn test_word_deletes_and_kills() {
        let mut area = area(40, 3);
        area.set_value("hello big world");
        assert!(area.delete_word_backward());
        assert_eq!(area.value(), "hello big ");

        area.set_cursor(LogicalPosition::new(0, 5));
        assert!(area.delete_word_forward());
        assert_eq!(area.value(), "hello ");

        area.set_value("abc def\nxyz");
        area.set_cursor(LogicalPosition::new(0, 3));
        assert!(area.kill_to_line_end());
        assert_eq!(area.value(), "abc\nxyz");
        assert!(area.kill_to_line_end());
        assert_eq!(area.value(), "abcxyz");
        assert!(area.kill_to_line_start());
        assert_eq!(area.value(), "xyz");
        assert!(!area.kill_to_line_start());
    }

    #[test]
    fn test_case_transforms() {
        let mut area = area(40, 3);
        area.set_value("hello WORLD");
        area.set_cursor(LogicalPosition::start());
        assert!(area.uppercase_word());
        assert_eq!(area.value(), "HELLO WORLD");
        assert_eq!(area.cursor(), LogicalPosition::new(0, 5));
        assert!(area.capitalize_word());
        assert_eq!(area.value(), "HELLO World");
        area.set_cursor(LogicalPosition::start());
        assert!(area.lowercase_word());
        assert_eq!(area.value(), "hello World");
        area.move_cursor(Direction::BufferEnd);
        assert!(!area.uppercase_word());
    }

    #[test]
    fn test_transpose() {
        let mut area = area(40, 3);
        area.set_value("abc");
        assert!(area.transpose());
        assert_eq!(area.value(), "acb");
        area.set_cursor(LogicalPosition::new(0, 1));
        assert!(area.transpose());
        assert_eq!(area.value(), "cab");
        assert_eq!(area.cursor(), LogicalPosition::new(0, 2));
        area.set_cursor(LogicalPosition::start());
        assert!(!area.transpose());
    }

    #[test]
    fn test_transpose_moves_whole_clusters() {
        let mut area = area(40, 3);
        area.set_value("xe\u{0301}");
        assert!(area.transpose());
        assert_eq!(area.value(), "e\u{0301}x");
        assert_eq!(area.cursor(), LogicalPosition::new(0, 3));

        area.set_value("a\u{0301}bc");
        area.set_cursor(LogicalPosition::new(0, 2));
        assert!(area.transpose());
        assert_eq!(area.value(), "ba\u{0301}c");
        assert_eq!(area.cursor(), LogicalPosition::new(0, 3));
    }

    #[test]
    fn test_try_set_cursor_rejects_outside() {
        let mut area = area(20, 3);
        area.set_value("ab");
        assert_eq!(
            area.try_set_cursor(LogicalPosition::new(0, 5)),
            Err(Error::InvalidPosition { row: 0, col: 5 })
        );
        assert!(area.try_set_cursor(LogicalPosition::new(0, 1)).is_ok());
        area.set_cursor(LogicalPosition::new(7, 7));
        assert_eq!(area.cursor(), LogicalPosition::new(0, 2));
    }

    #[test]
    fn test_width_change_keeps_logical_cursor() {
        let mut area = area(40, 3);
        type_str(&mut area, "foo bar baz");
        assert_eq!(area.visual_line_count(), 1);
        area.set_width(5);
        assert_eq!(area.visual_line_count(), 3);
        assert_eq!(area.cursor(), LogicalPosition::new(0, 11));
        assert_eq!(area.cursor_visual_position(), VisualPosition::new(2, 3));
    }

    #[test]
    fn test_narrowing_below_wide_cluster_keeps_it_alone() {
        let mut area = area(4, 3);
        assert!(area.insert_char('中'));
        area.set_width(1);

        assert_eq!(area.value(), "中");
        assert_eq!(area.visual_line_count(), 1);
        let overflowing: Vec<_> = area.layout().overflowing().map(|(row, _)| row).collect();
        assert_eq!(overflowing, vec![0]);

        // Narrow text still wraps onto lines of its own
        assert!(area.insert_char('a'));
        assert_eq!(area.rendered_lines(), vec!["中", "a", ""]);
        // A second wide cluster would add another overflowing line
        assert_eq!(
            area.try_insert_char('文'),
            Err(Error::Rejected(Rejection::LineWidth {
                visual_row: 0,
                width: 2,
                limit: 1,
            }))
        );
        assert_eq!(area.value(), "中a");
    }

    #[test]
    fn test_tightened_limit_keeps_content() {
        let mut area = area(20, 3);
        type_str(&mut area, "abcdef");
        area.set_char_limit(3);
        assert_eq!(area.value(), "abcdef");
        assert!(!area.insert_char('x'));
        assert!(area.delete_backward());
        assert_eq!(area.value(), "abcde");
    }

    #[test]
    fn test_caret_follows_viewport() {
        let mut area = area(20, 1);
        area.set_value("a\nb\nc");
        assert_eq!(area.scroll_offset(), 2);
        assert_eq!(area.caret_position(), Some(VisualPosition::new(0, 1)));
        area.scroll_viewport(ScrollDirection::Up, 1);
        assert_eq!(area.caret_position(), None);
    }

    #[test]
    fn test_apply_commands() {
        let mut area = area(20, 3);
        assert!(area.apply(Command::InsertStr("hi there".into())));
        assert!(area.apply(Command::Move(Direction::WordLeft)));
        assert!(area.apply(Command::UppercaseWord));
        assert_eq!(area.value(), "hi THERE");
        assert!(!area.apply(Command::Move(Direction::BufferEnd)));
        assert!(!area.apply(Command::Scroll(ScrollDirection::Down, 1)));
        assert!(area.apply(Command::Reset));
        assert!(!area.apply(Command::Reset));
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("abc", 2), "ab");
        assert_eq!(truncate_graphemes("abc", 0), "");
        assert_eq!(truncate_graphemes("中文", 5), "中文");
    }
}
