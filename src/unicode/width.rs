//! Display width calculation for terminal rendering.

use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Display width of a string or grapheme cluster in terminal columns.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    // Printable ASCII is one column per byte
    if s.bytes().all(|b| (b' '..=b'~').contains(&b)) {
        return s.len();
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with_method("hello", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_with_method("", WidthMethod::WcWidth), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_with_method("漢", WidthMethod::Unicode), 2);
    }

    #[test]
    fn test_combining_mark_adds_no_width() {
        assert_eq!(display_width_with_method("e\u{0301}", WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_ambiguous_width_follows_method() {
        // Circled digit one is ambiguous width
        assert_eq!(display_width_with_method("①", WidthMethod::WcWidth), 1);
        assert_eq!(display_width_with_method("①", WidthMethod::Unicode), 2);
    }
}
