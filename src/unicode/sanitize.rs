//! Normalization of text entering the buffer.
//!
//! After sanitizing, `\n` is the only line-break character left. The rope
//! treats CR, VT, FF, NEL, LS and PS as line breaks too, so nothing else may
//! reach it or logical rows would drift from what the wrapper sees.

/// Sanitize inserted text.
///
/// - `\r\n` and lone `\r` become `\n`
/// - VT, FF, NEL, LS and PS become `\n`
/// - `\t` expands to `tab_width` spaces
/// - other control characters are dropped
#[must_use]
pub fn sanitize(input: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => out.push('\n'),
            '\t' => out.extend(std::iter::repeat_n(' ', tab_width)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
