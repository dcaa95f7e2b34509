//! Helpers for logging raw player input on a single line.

/// Longest input preview written to the log.
const MAX_PREVIEW: usize = 120;

/// Escape a player-supplied string for single-line logging.
///
/// Backslash, `\n`, `\r` and `\t` become their escape sequences and other
/// control characters are written as `\xNN`. Input longer than
/// [`MAX_PREVIEW`] characters is cut off with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
