use crate::rendering::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, WikiLink},
    types::InlineNode,
};

/// Scans one line into [`InlineNode`]s covering the whole input.
///
/// Code spans are tried first at every position and suppress everything
/// inside them: `` `[[not a link]]` `` is one code span.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    scan(s, true)
}

/// Like [`parse_inline`] but only recognises code spans.
///
/// Used on text that is already known to hold no cross-document links.
pub fn split_code_spans(s: &str) -> Vec<InlineNode> {
    scan(s, false)
}

fn scan(s: &str, wikilinks: bool) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_code_span(&mut cur).or_else(|| {
            if wikilinks {
                try_parse_wikilink(&mut cur)
            } else {
                None
            }
        });
        match node {
            Some(node) => {
                flush_text(&mut out, text_start, node.full().start);
                text_start = node.full().end;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span at the current position.
///
/// On failure the cursor is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts to parse `[[target]]` or `[[target|alias]]` at the current position.
///
/// A blank target is not a link. On failure the cursor is restored.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(WikiLink::OPEN.len());
    let target_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(WikiLink::ALIAS) && !cur.starts_with(WikiLink::CLOSE) {
        cur.bump();
    }
    let target = Span {
        start: target_start,
        end: cur.pos(),
    };

    let mut alias = None;
    if cur.peek() == Some(WikiLink::ALIAS) {
        cur.bump();
        let alias_start = cur.pos();
        while !cur.eof() && !cur.starts_with(WikiLink::CLOSE) {
            cur.bump();
        }
        alias = Some(Span {
            start: alias_start,
            end: cur.pos(),
        });
    }

    let blank_target = target.slice(cur.s).is_none_or(|t| t.trim().is_empty());
    if !cur.starts_with(WikiLink::CLOSE) || blank_target {
        *cur = saved;
        return None;
    }
    cur.bump_n(WikiLink::CLOSE.len());

    Some(InlineNode::WikiLink {
        full: Span {
            start,
            end: cur.pos(),
        },
        target,
        alias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline("hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline("`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn parse_wikilink_with_alias() {
        let nodes = parse_inline("see [[target|alias]]!");
        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[1],
            InlineNode::WikiLink {
                full: Span { start: 4, end: 20 },
                target: Span { start: 6, end: 12 },
                alias: Some(Span { start: 13, end: 18 }),
            }
        );
    }

    #[test]
    fn code_span_suppresses_wikilink() {
        let nodes = parse_inline("`[[not a link]]`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn unclosed_constructs_become_text() {
        let nodes = parse_inline("[[unclosed and `also unclosed");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 29 })]);
    }

    #[test]
    fn empty_target_is_not_a_link() {
        let nodes = parse_inline("[[]] and [[ |x]]");
        assert!(nodes.iter().all(|n| matches!(n, InlineNode::Text(_))));
    }

    #[test]
    fn split_code_spans_ignores_wikilinks() {
        let nodes = split_code_spans("[[a]] `b`");
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], InlineNode::Text(Span { start: 0, end: 6 })));
        assert!(matches!(nodes[1], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn multibyte_text_around_links() {
        let s = "café [[naïve]] ok";
        let nodes = parse_inline(s);
        let link = nodes
            .iter()
            .find(|n| matches!(n, InlineNode::WikiLink { .. }))
            .unwrap();
        assert_eq!(link.full().slice(s), Some("[[naïve]]"));
    }
}
