//! Greedy word wrap of logical lines into width-bounded visual lines.
//!
//! [`wrap`] is a pure function of (buffer content, width, width method). The
//! resulting [`Layout`] owns the visual lines and answers both directions of
//! the coordinate mapping. Nothing in it is authoritative: the text area
//! rebuilds it after every committed edit and every configuration change.
//!
//! # Wrapping rules
//!
//! Each logical line is wrapped on its own. The line is split into words,
//! where a word is a run of non-whitespace grapheme clusters together with
//! the whitespace run that follows it. Words are packed greedily:
//!
//! 1. A word that fits on the current visual line, trailing whitespace
//!    included, is appended.
//! 2. A word whose text fits but whose trailing whitespace does not is
//!    appended, and the whitespace spills onto the following line(s).
//! 3. Otherwise the word starts a new visual line. A word wider than the
//!    whole width is broken at cluster boundaries.
//!
//! Concatenating the visual lines of a logical line in order reproduces it
//! exactly, and no visual line is wider than the width unless it consists of
//! a single cluster that is wider than the width by itself.

use crate::text::buffer::{Buffer, LogicalPosition};
use crate::unicode::{Cluster, WidthMethod, clusters, display_width_with_method, prefix_width};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Character range of one visual segment of a logical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSegment {
    pub start: usize,
    pub end: usize,
    pub width: usize,
}

/// A width-bounded slice of exactly one logical line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualLine {
    /// Logical row this line belongs to.
    pub row: usize,
    /// Logical column of the first character.
    pub start: usize,
    /// Logical column just past the last character.
    pub end: usize,
    /// Display width in terminal columns.
    pub width: usize,
    /// The characters of the slice.
    pub text: String,
}

impl VisualLine {
    /// Number of characters in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the line holds no characters (only for empty logical lines).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this line continues a logical line wrapped above it.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.start > 0
    }
}

/// Position in the visual line sequence. `col` is a display column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualPosition {
    pub row: usize,
    pub col: usize,
}

impl VisualPosition {
    /// Create a visual position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a logical position sits within its wrapped logical line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// Index of the visual segment within the logical line.
    pub row_offset: usize,
    /// Number of visual segments the logical line wraps into.
    pub height: usize,
    /// Logical column where the segment starts.
    pub start_column: usize,
    /// Display column within the segment.
    pub column_offset: usize,
    /// Display width of the segment.
    pub width: usize,
    /// Characters between the segment start and the position.
    pub char_offset: usize,
}

/// Wrapped layout of a whole buffer.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    lines: Vec<VisualLine>,
    /// Index of the first visual line of each logical row.
    first: Vec<usize>,
    width: usize,
    method: WidthMethod,
}

/// Wrap every logical line of `buffer` to `width` display columns.
#[must_use]
pub fn wrap(buffer: &Buffer, width: usize, method: WidthMethod) -> Layout {
    let width = width.max(1);
    let mut lines = Vec::with_capacity(buffer.line_count());
    let mut first = Vec::with_capacity(buffer.line_count());

    for row in 0..buffer.line_count() {
        let text = buffer.line(row);
        first.push(lines.len());
        let bytes: Vec<usize> = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()))
            .collect();
        for segment in wrap_line(&text, width, method) {
            lines.push(VisualLine {
                row,
                start: segment.start,
                end: segment.end,
                width: segment.width,
                text: text[bytes[segment.start]..bytes[segment.end]].to_string(),
            });
        }
    }

    Layout {
        lines,
        first,
        width,
        method,
    }
}

/// Wrap a single logical line. Always yields at least one segment.
#[must_use]
pub fn wrap_line(line: &str, width: usize, method: WidthMethod) -> Vec<LineSegment> {
    let clusters = clusters(line, method);
    let mut builder = SegmentBuilder::new(width.max(1));
    for word in words(&clusters) {
        builder.place(&word);
    }
    builder.finish()
}

struct Word<'a> {
    text: &'a [Cluster],
    space: &'a [Cluster],
}

fn width_of(clusters: &[Cluster]) -> usize {
    clusters.iter().map(|c| c.width).sum()
}

fn words(clusters: &[Cluster]) -> Vec<Word<'_>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < clusters.len() {
        let start = i;
        while i < clusters.len() && !clusters[i].whitespace {
            i += 1;
        }
        let split = i;
        while i < clusters.len() && clusters[i].whitespace {
            i += 1;
        }
        out.push(Word {
            text: &clusters[start..split],
            space: &clusters[split..i],
        });
    }
    out
}

struct SegmentBuilder {
    width: usize,
    start: usize,
    end: usize,
    used: usize,
    segments: Vec<LineSegment>,
}

impl SegmentBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            start: 0,
            end: 0,
            used: 0,
            segments: Vec::new(),
        }
    }

    fn break_line(&mut self) {
        self.segments.push(LineSegment {
            start: self.start,
            end: self.end,
            width: self.used,
        });
        self.start = self.end;
        self.used = 0;
    }

    /// Append clusters already known to fit.
    fn extend(&mut self, clusters: &[Cluster]) {
        for cluster in clusters {
            self.end = cluster.end();
            self.used += cluster.width;
        }
    }

    /// Append one cluster, breaking first if it would overflow.
    fn push(&mut self, cluster: &Cluster) {
        if self.used > 0 && self.used + cluster.width > self.width {
            self.break_line();
        }
        self.end = cluster.end();
        self.used += cluster.width;
    }

    fn place(&mut self, word: &Word<'_>) {
        let text = width_of(word.text);
        let space = width_of(word.space);

        if self.used + text + space <= self.width {
            self.extend(word.text);
            self.extend(word.space);
            return;
        }

        if self.used + text <= self.width {
            self.extend(word.text);
        } else {
            if self.used > 0 {
                self.break_line();
            }
            if text + space <= self.width {
                self.extend(word.text);
                self.extend(word.space);
                return;
            }
            for cluster in word.text {
                self.push(cluster);
            }
        }

        for cluster in word.space {
            self.push(cluster);
        }
    }

    fn finish(mut self) -> Vec<LineSegment> {
        if self.end > self.start || self.segments.is_empty() {
            self.break_line();
        }
        self.segments
    }
}

impl Layout {
    /// Number of visual lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the layout has no lines (only a default-constructed layout).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All visual lines in order.
    #[must_use]
    pub fn lines(&self) -> &[VisualLine] {
        &self.lines
    }

    /// Get a visual line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&VisualLine> {
        self.lines.get(idx)
    }

    /// Width the layout was wrapped to.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Widest visual line.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.lines.iter().map(|l| l.width).max().unwrap_or(0)
    }

    /// Indices of the visual lines belonging to a logical row.
    #[must_use]
    pub fn segments(&self, row: usize) -> Range<usize> {
        let Some(&start) = self.first.get(row) else {
            return self.lines.len()..self.lines.len();
        };
        let end = self.first.get(row + 1).copied().unwrap_or(self.lines.len());
        start..end
    }

    /// Visual lines wider than the layout width, with their indices.
    pub fn overflowing(&self) -> impl Iterator<Item = (usize, &VisualLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter(move |(_, line)| line.width > self.width)
    }

    /// Index of the visual line holding a logical position.
    ///
    /// A column equal to a segment's end belongs to the next segment of the
    /// same logical line, except on the last segment, which claims the end
    /// of the logical line.
    #[must_use]
    pub fn visual_row(&self, pos: LogicalPosition) -> usize {
        let mut range = self.segments(pos.row);
        let last = range.end.saturating_sub(1);
        range
            .find(|&idx| pos.col < self.lines[idx].end)
            .unwrap_or(last)
    }

    /// Map a logical position to its visual position.
    #[must_use]
    pub fn to_visual(&self, pos: LogicalPosition) -> VisualPosition {
        let row = self.visual_row(pos);
        let Some(line) = self.lines.get(row) else {
            return VisualPosition::default();
        };
        let chars = pos.col.saturating_sub(line.start).min(line.len());
        VisualPosition::new(row, prefix_width(&line.text, chars, self.method))
    }

    /// Map a visual position back to the closest logical position.
    ///
    /// Rows past the end clamp to the last line. Columns past the end of a
    /// line clamp to its last addressable column; a column inside a wide
    /// cluster resolves to the start of that cluster.
    #[must_use]
    pub fn to_logical(&self, pos: VisualPosition) -> LogicalPosition {
        if self.lines.is_empty() {
            return LogicalPosition::start();
        }
        let idx = pos.row.min(self.lines.len() - 1);
        let line = &self.lines[idx];

        let mut col = line.start;
        let mut used = 0usize;
        for grapheme in line.text.graphemes(true) {
            let width = display_width_with_method(grapheme, self.method);
            if used + width > pos.col {
                break;
            }
            used += width;
            col += grapheme.chars().count();
        }

        LogicalPosition::new(line.row, col.min(self.last_col(idx)))
    }

    /// First logical column of a visual line.
    #[must_use]
    pub fn first_col(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, |line| line.start)
    }

    /// Last logical column the cursor can occupy while staying on a visual line.
    ///
    /// On the last segment of a logical line that is the line end. On earlier
    /// segments it is the start of the segment's last cluster, because the
    /// segment end is already the first column of the next segment.
    #[must_use]
    pub fn last_col(&self, idx: usize) -> usize {
        let Some(line) = self.lines.get(idx) else {
            return 0;
        };
        let is_last = self
            .lines
            .get(idx + 1)
            .is_none_or(|next| next.row != line.row);
        if is_last {
            return line.end;
        }
        let tail = line
            .text
            .graphemes(true)
            .next_back()
            .map_or(0, |g| g.chars().count());
        line.end - tail
    }

    /// Describe where a logical position sits within its wrapped line.
    #[must_use]
    pub fn line_info(&self, pos: LogicalPosition) -> LineInfo {
        let idx = self.visual_row(pos);
        let Some(line) = self.lines.get(idx) else {
            return LineInfo::default();
        };
        let range = self.segments(line.row);
        LineInfo {
            row_offset: idx - range.start,
            height: range.len(),
            start_column: line.start,
            column_offset: self.to_visual(pos).col,
            width: line.width,
            char_offset: pos.col.saturating_sub(line.start),
        }
    }
}
