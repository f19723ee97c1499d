//! Formatting utilities used by the report renderer and the CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad `s` with trailing spaces up to `width` display columns.
/// Longer values are returned untouched (never truncated).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Pad `s` with leading spaces up to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(fill))
}

/// Escape the characters that would break an HTML `<pre>` body.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
