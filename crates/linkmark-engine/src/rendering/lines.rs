use super::span::Span;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line content in the input, terminator excluded.
    pub span: Span,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their byte spans.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
/// of the input does not start another (empty) line.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0usize;
    std::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }
        let start = pos;
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }
        pos = match bytes.get(end) {
            Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => end + 2,
            Some(_) => end + 1,
            None => end,
        };
        Some(LineRef {
            span: Span { start, end },
            text: &text[start..end],
        })
    })
}
