use crate::links::{LinkService, LinkSpan, ProjectContext, sanitize};

use super::{
    blocks::{Block, BlockKind, HeadingLevel, SegmentHandler, segment},
    inline::{PlainText, reconcile, transform_line},
};

/// Builds the block sequence for the editor view.
struct BlockSink<'r, S: LinkService + ?Sized> {
    links: &'r S,
    project: Option<&'r ProjectContext>,
    out: Vec<Block>,
}

impl<S: LinkService + ?Sized> BlockSink<'_, S> {
    fn inline_block(&mut self, kind: BlockKind, text: &str) {
        let mut spans: Vec<LinkSpan> = sanitize(text, self.links.detect_links(text))
            .into_iter()
            .map(LinkSpan::from)
            .collect();
        self.links.resolve_links(&mut spans, self.project);

        let mut content = transform_line(text, &mut spans, &PlainText);
        reconcile(&mut content, &mut spans);

        self.out.push(Block {
            kind,
            content,
            links: spans,
        });
    }
}

impl<S: LinkService + ?Sized> SegmentHandler for BlockSink<'_, S> {
    fn heading(&mut self, level: HeadingLevel, text: &str) {
        self.inline_block(BlockKind::heading(level), text);
    }

    fn list_item(&mut self, text: &str) {
        self.inline_block(BlockKind::ListItem, text);
    }

    fn paragraph(&mut self, text: &str) {
        self.inline_block(BlockKind::Paragraph, text);
    }

    fn blank(&mut self) {
        self.out.push(Block::blank());
    }

    fn code_block(&mut self, _info: Option<&str>, content: &str) {
        self.out.push(Block::new(BlockKind::CodeBlock, content));
    }
}

pub(crate) fn render_blocks<S: LinkService + ?Sized>(
    markdown: &str,
    links: &S,
    project: Option<&ProjectContext>,
) -> Vec<Block> {
    if markdown.trim().is_empty() {
        return vec![];
    }

    let mut sink = BlockSink {
        links,
        project,
        out: vec![],
    };
    segment(markdown, &mut sink);
    log::debug!(
        "rendered {} blocks ({} links)",
        sink.out.len(),
        sink.out.iter().map(|b| b.links.len()).sum::<usize>()
    );
    sink.out
}
