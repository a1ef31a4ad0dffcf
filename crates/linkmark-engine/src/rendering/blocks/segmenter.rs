use crate::rendering::lines::lines_with_spans;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::HeadingLevel,
};

/// Per-line-type callbacks driven by the [`Segmenter`].
///
/// Text handed to the callbacks has its block marker stripped and its
/// trailing whitespace trimmed. Code block content is verbatim.
pub trait SegmentHandler {
    fn heading(&mut self, level: HeadingLevel, text: &str);
    fn list_item(&mut self, text: &str);
    fn paragraph(&mut self, text: &str);
    fn blank(&mut self);

    /// An opening fence was seen. Nothing has been accumulated yet.
    fn fence_opened(&mut self, _info: Option<&str>) {}

    /// A fence closed (or input ended inside one) with at least one line.
    fn code_block(&mut self, info: Option<&str>, content: &str);
}

#[derive(Debug, Default)]
enum FenceState {
    #[default]
    Outside,
    Inside {
        info: Option<String>,
        lines: Vec<String>,
    },
}

/// Single forward pass state machine that splits text into line groups.
///
/// The only state is whether we are inside a code fence, along with the lines
/// accumulated so far. Fenced content is a raw zone: lines inside it are never
/// classified.
#[derive(Debug, Default)]
pub struct Segmenter {
    fence: FenceState,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<H: SegmentHandler + ?Sized>(&mut self, line: &str, handler: &mut H) {
        let class = MarkdownLineClassifier.classify(line);

        if let FenceState::Inside { info, lines } = &mut self.fence {
            if matches!(class, LineClass::CodeFenceMarker(_)) {
                log::trace!("code fence closed after {} lines", lines.len());
                let info = info.take();
                let lines = std::mem::take(lines);
                self.fence = FenceState::Outside;
                if !lines.is_empty() {
                    handler.code_block(info.as_deref(), &lines.join("\n"));
                }
            } else {
                lines.push(line.to_string());
            }
            return;
        }

        match class {
            LineClass::CodeFenceMarker(sig) => {
                log::trace!("code fence opened (info: {:?})", sig.info);
                handler.fence_opened(sig.info);
                self.fence = FenceState::Inside {
                    info: sig.info.map(str::to_string),
                    lines: vec![],
                };
            }
            LineClass::Heading { level, text } => handler.heading(level, text),
            LineClass::ListItem { text } => handler.list_item(text),
            LineClass::Blank => handler.blank(),
            LineClass::Paragraph { text } => handler.paragraph(text),
        }
    }

    /// EOF flush: an unterminated fence still emits what it accumulated.
    pub fn finish<H: SegmentHandler + ?Sized>(self, handler: &mut H) {
        if let FenceState::Inside { info, lines } = self.fence
            && !lines.is_empty()
        {
            log::trace!("unterminated code fence flushed at end of input");
            handler.code_block(info.as_deref(), &lines.join("\n"));
        }
    }
}

/// Segments the whole of `text`, driving `handler` line by line.
pub fn segment<H: SegmentHandler + ?Sized>(text: &str, handler: &mut H) {
    let mut segmenter = Segmenter::new();
    for line in lines_with_spans(text) {
        segmenter.push(line.text, handler);
    }
    segmenter.finish(handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records callbacks as strings for easy comparison.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl SegmentHandler for Recorder {
        fn heading(&mut self, level: HeadingLevel, text: &str) {
            self.0.push(format!("h{}:{text}", level.as_u8()));
        }
        fn list_item(&mut self, text: &str) {
            self.0.push(format!("li:{text}"));
        }
        fn paragraph(&mut self, text: &str) {
            self.0.push(format!("p:{text}"));
        }
        fn blank(&mut self) {
            self.0.push("blank".into());
        }
        fn fence_opened(&mut self, info: Option<&str>) {
            self.0.push(format!("fence:{}", info.unwrap_or("")));
        }
        fn code_block(&mut self, info: Option<&str>, content: &str) {
            self.0.push(format!("code({}):{content}", info.unwrap_or("")));
        }
    }

    fn run(text: &str) -> Vec<String> {
        let mut rec = Recorder::default();
        segment(text, &mut rec);
        rec.0
    }

    #[test]
    fn mixed_document() {
        assert_eq!(
            run("# T\n- a\n\npara"),
            vec!["h1:T", "li:a", "blank", "p:para"]
        );
    }

    #[test]
    fn fence_content_is_verbatim_and_unclassified() {
        assert_eq!(
            run("```rust\n# not heading  \n\n- not list\n```"),
            vec![
                "fence:rust",
                "code(rust):# not heading  \n\n- not list"
            ]
        );
    }

    #[test]
    fn empty_fence_emits_no_code_block() {
        assert_eq!(run("```\n```\nafter"), vec!["fence:", "p:after"]);
    }

    #[test]
    fn unterminated_fence_is_flushed() {
        assert_eq!(
            run("intro\n```\nline 1\nline 2"),
            vec!["p:intro", "fence:", "code():line 1\nline 2"]
        );
    }

    #[test]
    fn odd_fence_count_keeps_trailing_content_in_one_block() {
        let out = run("```\na\n```\ntext\n```\nb\n\nc");
        assert_eq!(
            out,
            vec![
                "fence:",
                "code():a",
                "p:text",
                "fence:",
                "code():b\n\nc"
            ]
        );
    }

    #[test]
    fn segmenter_can_be_reused_after_fence_closes() {
        let mut rec = Recorder::default();
        let mut seg = Segmenter::new();
        seg.push("```", &mut rec);
        seg.push("x", &mut rec);
        seg.push("```", &mut rec);
        seg.push("## After", &mut rec);
        seg.finish(&mut rec);
        assert_eq!(rec.0, vec!["fence:", "code():x", "h2:After"]);
    }
}
