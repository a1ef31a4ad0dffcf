use serde::Serialize;

use crate::links::LinkSpan;

use super::kinds::HeadingLevel;

/// The kind of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    ListItem,
    Paragraph,
    CodeBlock,
}

impl BlockKind {
    pub fn heading(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => BlockKind::Heading1,
            HeadingLevel::H2 => BlockKind::Heading2,
            HeadingLevel::H3 => BlockKind::Heading3,
            HeadingLevel::H4 => BlockKind::Heading4,
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(
            self,
            BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 | BlockKind::Heading4
        )
    }
}

/// One classified unit of rendered output.
///
/// `content` is the final, syntax-stripped text. Every span in `links`
/// indexes into `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
    pub links: Vec<LinkSpan>,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            links: vec![],
        }
    }

    /// A blank line in the structured view.
    pub fn blank() -> Self {
        Self::new(BlockKind::Paragraph, String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.kind == BlockKind::Paragraph && self.content.is_empty()
    }
}
