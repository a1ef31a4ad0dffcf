use std::borrow::Cow;

/// Escapes `& < > " '` as entities.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
