use std::fmt::Write;
use std::ops::Range;

use crate::links::LinkSpan;

use super::{
    flavor::InlineFlavor,
    parser::split_code_spans,
    rules::{apply_rules, link_urls},
    types::InlineNode,
};

/// Something the rule table must treat as a single opaque character run.
enum Piece<'a> {
    /// Index into the link slice, plus the link's source syntax.
    Link { index: usize, raw: &'a str },
    /// Inner text of a code span.
    Code(&'a str),
    /// Target of a `[text](url)` link, in masked form.
    Url(String),
}

/// A line with links, code spans and link targets swapped for placeholder
/// tokens `<mark><id><mark>`. `mark` is a private-use char absent from the
/// line, and the rule delimiters never occur inside a token, so a match
/// either contains a whole token or none of it.
struct Masked<'a> {
    mark: char,
    text: String,
    pieces: Vec<Piece<'a>>,
}

impl<'a> Masked<'a> {
    fn push_token(&mut self, piece: Piece<'a>) {
        let id = self.pieces.len();
        self.pieces.push(piece);
        let _ = write!(self.text, "{0}{id}{0}", self.mark);
    }

    fn push_text(&mut self, text: &'a str) {
        for node in split_code_spans(text) {
            match node {
                InlineNode::CodeSpan { inner, .. } => {
                    self.push_token(Piece::Code(inner.slice(text).unwrap_or_default()));
                }
                other => self
                    .text
                    .push_str(other.full().slice(text).unwrap_or_default()),
            }
        }
    }

    /// Hides every `[text](url)` target so emphasis cannot match inside it.
    fn mask_urls(&mut self) {
        let urls = link_urls(&self.text);
        if urls.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let mut copied = 0;
        for url in urls {
            self.text.push_str(&text[copied..url.start]);
            self.push_token(Piece::Url(text[url.clone()].to_string()));
            copied = url.end;
        }
        self.text.push_str(&text[copied..]);
    }

    /// Replaces each token in `text` with its rendering, moving every link
    /// span to where its output lands in `out`.
    fn expand<F: InlineFlavor + ?Sized>(
        &self,
        text: &str,
        links: &mut [LinkSpan],
        flavor: &F,
        out: &mut String,
    ) {
        let width = self.mark.len_utf8();
        let mut rest = text;
        while let Some(open) = rest.find(self.mark) {
            out.push_str(&rest[..open]);
            let after = &rest[open + width..];
            let Some(close) = after.find(self.mark) else {
                out.push_str(&rest[open..]);
                return;
            };
            let piece = after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|id| self.pieces.get(id));
            match piece {
                Some(Piece::Link { index, raw }) => {
                    if let Some(link) = links.get_mut(*index) {
                        let rendered = flavor.doc_link(raw, link);
                        link.start_index = out.len();
                        link.length = rendered.len();
                        out.push_str(&rendered);
                    }
                }
                Some(Piece::Code(inner)) => out.push_str(&flavor.code(inner)),
                Some(Piece::Url(url)) => self.expand(url, links, flavor, out),
                None => out.push_str(&rest[open..open + width + close + width]),
            }
            rest = &after[close + width..];
        }
        out.push_str(rest);
    }
}

/// Transforms one marker-stripped line.
///
/// `links` must be sorted by `start_index`, non-overlapping, and index valid
/// char-boundary ranges of `line` (what [`crate::links::sanitize`] returns).
/// Links and code spans are masked, the rule table runs over the whole line
/// (so emphasis may wrap either), and each link is then emitted by
/// [`InlineFlavor::doc_link`] with its `start_index` / `length` relocated to
/// where that output landed.
pub fn transform_line<F: InlineFlavor + ?Sized>(
    line: &str,
    links: &mut [LinkSpan],
    flavor: &F,
) -> String {
    let Some(mark) = ('\u{E000}'..='\u{F8FF}').find(|c| !line.contains(*c)) else {
        log::warn!("no free placeholder character in line; inline rules skipped");
        return links_only(line, links, flavor);
    };

    let mut masked = Masked {
        mark,
        text: String::with_capacity(line.len()),
        pieces: Vec::with_capacity(links.len()),
    };
    let mut copied = 0;
    for (index, link) in links.iter().enumerate() {
        let Some((before, raw)) = fit(line, copied, link) else {
            continue;
        };
        masked.push_text(before);
        masked.push_token(Piece::Link { index, raw });
        copied = link.range().end;
    }
    masked.push_text(line.get(copied..).unwrap_or_default());
    masked.mask_urls();

    let ruled = apply_rules(&masked.text, flavor);
    let mut out = String::with_capacity(ruled.len());
    masked.expand(&ruled, links, flavor, &mut out);
    out
}

/// Transforms text that holds no cross-document links.
pub fn transform_text<F: InlineFlavor + ?Sized>(text: &str, flavor: &F) -> String {
    transform_line(text, &mut [], flavor)
}

/// The text before `link` (from `copied`) and the link's source syntax, or
/// `None` when the link does not fit the line.
fn fit<'a>(line: &'a str, copied: usize, link: &LinkSpan) -> Option<(&'a str, &'a str)> {
    let Range { start, end } = link.range();
    let found = line.get(copied..start).zip(line.get(start..end));
    if found.is_none() {
        log::warn!(
            "position drift: link to {:?} at {start}..{end} does not fit the line; left unadjusted",
            link.target_identifier
        );
    }
    found
}

fn links_only<F: InlineFlavor + ?Sized>(line: &str, links: &mut [LinkSpan], flavor: &F) -> String {
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    for link in links.iter_mut() {
        let Some((before, raw)) = fit(line, copied, link) else {
            continue;
        };
        out.push_str(before);
        let rendered = flavor.doc_link(raw, link);
        copied = link.range().end;
        link.start_index = out.len();
        link.length = rendered.len();
        out.push_str(&rendered);
    }
    out.push_str(line.get(copied..).unwrap_or_default());
    out
}
