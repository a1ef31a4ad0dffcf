use crate::rendering::blocks::{Block, BlockKind};

/// Panics if any block breaks a structural invariant of the structured view.
///
/// - every link span slices `content` to exactly its display text
/// - spans are in order and do not overlap
/// - code blocks carry no links
pub fn check(blocks: &[Block]) {
    for (i, b) in blocks.iter().enumerate() {
        if b.kind == BlockKind::CodeBlock {
            assert!(b.links.is_empty(), "code block {i} has links: {:?}", b.links);
        }

        let mut prev_end = 0;
        for link in &b.links {
            assert!(link.length > 0, "block {i}: empty link span {link:?}");
            assert!(
                link.start_index >= prev_end,
                "block {i}: link {link:?} overlaps previous span ending at {prev_end}"
            );
            let slice = b.content.get(link.range());
            assert_eq!(
                slice,
                Some(link.display_text.as_str()),
                "block {i}: span {:?} does not cover display text in {:?}",
                link.range(),
                b.content
            );
            prev_end = link.range().end;
        }
    }
}
