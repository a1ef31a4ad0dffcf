use super::kinds::{CodeFence, FenceSig, Heading, HeadingLevel, ListItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// of its neighbours. Fence state is the segmenter's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A line starting with three backticks.
    CodeFenceMarker(FenceSig<'a>),
    /// A heading, with the marker stripped from `text`.
    Heading { level: HeadingLevel, text: &'a str },
    /// A bullet item, with the marker stripped from `text`.
    ListItem { text: &'a str },
    /// Empty or whitespace-only.
    Blank,
    /// Anything else.
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the segmentation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line after trimming its trailing whitespace.
    ///
    /// Precedence: fence, headings (longest marker first), list items, blank,
    /// paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim_end();

        if let Some(sig) = CodeFence::sig(trimmed) {
            return LineClass::CodeFenceMarker(sig);
        }
        if let Some((level, text)) = Heading::strip_marker(trimmed) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = ListItem::strip_marker(trimmed) {
            return LineClass::ListItem { text };
        }
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        LineClass::Paragraph { text: trimmed }
    }
}
