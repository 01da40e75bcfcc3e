//! Grapheme cluster measurement for layout.

use crate::unicode::width::{WidthMethod, display_width_with_method};
use unicode_segmentation::UnicodeSegmentation;

/// One grapheme cluster of a logical line, addressed in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cluster {
    /// Character column of the first character of the cluster.
    pub col: usize,
    /// Number of characters in the cluster.
    pub len: usize,
    /// Display width in terminal columns.
    pub width: usize,
    /// Whether every character of the cluster is whitespace.
    pub whitespace: bool,
}

impl Cluster {
    /// Character column just past the cluster.
    #[must_use]
    pub fn end(&self) -> usize {
        self.col + self.len
    }
}

/// Split a line into measured grapheme clusters.
#[must_use]
pub fn clusters(line: &str, method: WidthMethod) -> Vec<Cluster> {
    let mut out = Vec::with_capacity(line.len());
    let mut col = 0usize;
    for grapheme in line.graphemes(true) {
        let len = grapheme.chars().count();
        out.push(Cluster {
            col,
            len,
            width: display_width_with_method(grapheme, method),
            whitespace: grapheme.chars().all(char::is_whitespace),
        });
        col += len;
    }
    out
}

/// Display width of the clusters within the first `chars` characters of `line`.
///
/// Measured cluster by cluster so it agrees with [`clusters`].
#[must_use]
pub fn prefix_width(line: &str, chars: usize, method: WidthMethod) -> usize {
    let mut at = 0;
    let mut width = 0;
    for grapheme in line.graphemes(true) {
        at += grapheme.chars().count();
        if at > chars {
            break;
        }
        width += display_width_with_method(grapheme, method);
    }
    width
}
