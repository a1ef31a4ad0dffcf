use crate::rendering::span::Span;

/// A scanned inline region of a single line, as byte spans into that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any raw zone. Emphasis and explicit links live here.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone: nothing inside
    /// it is transformed.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
    /// A cross-document reference `[[target]]` or `[[target|alias]]`.
    WikiLink {
        /// Full span including `[[` and `]]`.
        full: Span,
        /// Span of the target.
        target: Span,
        /// Span of the alias if present (after `|`).
        alias: Option<Span>,
    },
}

impl InlineNode {
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::WikiLink { full, .. } => *full,
        }
    }
}
