use std::borrow::Cow;

use crate::links::LinkSpan;

/// Output representation for inline substitutions.
///
/// The rules decide *what* matched; the flavor decides what it becomes.
pub trait InlineFlavor {
    fn strong(&self, inner: &str) -> String;
    fn emphasis(&self, inner: &str) -> String;
    fn code(&self, inner: &str) -> String;
    fn link(&self, text: &str, url: &str) -> String;

    /// Text emitted for a cross-document link whose source syntax is `raw`.
    fn doc_link<'a>(&self, raw: &'a str, link: &LinkSpan) -> Cow<'a, str>;
}

/// Syntax-free text for the structured view.
///
/// Cross-document links are copied through verbatim; reconciliation swaps
/// in their display text afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl InlineFlavor for PlainText {
    fn strong(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn emphasis(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn code(&self, inner: &str) -> String {
        inner.to_string()
    }

    fn link(&self, text: &str, url: &str) -> String {
        format!("{text} ({url})")
    }

    fn doc_link<'a>(&self, raw: &'a str, _link: &LinkSpan) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }
}

/// HTML tags. Input is expected to be escaped already.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html {
    /// Add the `unresolved` class to links the service could not resolve.
    pub mark_unresolved: bool,
}

impl InlineFlavor for Html {
    fn strong(&self, inner: &str) -> String {
        format!("<strong>{inner}</strong>")
    }

    fn emphasis(&self, inner: &str) -> String {
        format!("<em>{inner}</em>")
    }

    fn code(&self, inner: &str) -> String {
        format!("<code>{inner}</code>")
    }

    fn link(&self, text: &str, url: &str) -> String {
        format!("<a href=\"{url}\">{text}</a>")
    }

    fn doc_link<'a>(&self, _raw: &'a str, link: &LinkSpan) -> Cow<'a, str> {
        let class = if self.mark_unresolved && !link.resolved {
            "doc-link unresolved"
        } else {
            "doc-link"
        };
        Cow::Owned(format!(
            "<span class=\"{class}\" data-target=\"{}\">{}</span>",
            link.target_identifier, link.display_text
        ))
    }
}
