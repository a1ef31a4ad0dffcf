//! # HTML Rendering
//!
//! Drives the shared segmenter with escaping and tag emission.
//!
//! ## Open/close tracking
//!
//! - A `<p>` opens on the first paragraph line and closes on a blank line,
//!   heading, list item, fence, or end of input. Consecutive paragraph lines
//!   share one `<p>`, joined by a single space.
//! - A `<ul>` opens on the first list item and closes only on a blank line or
//!   end of input.
//!
//! Each line is escaped before links are detected and before any inline rule
//! runs, so rules only ever emit tags into already-safe text.

pub mod document;
pub mod escape;

pub use document::{DEFAULT_STYLESHEET, HtmlOptions, wrap_document};
pub use escape::escape;

use crate::links::{LinkService, LinkSpan, ProjectContext, sanitize};

use super::{
    blocks::{HeadingLevel, SegmentHandler, segment},
    inline::{Html, transform_line},
};

struct HtmlSink<'r, S: LinkService + ?Sized> {
    links: &'r S,
    project: Option<&'r ProjectContext>,
    body: String,
    list_open: bool,
    paragraph_open: bool,
}

impl<S: LinkService + ?Sized> HtmlSink<'_, S> {
    fn inline(&self, text: &str) -> String {
        let escaped = escape(text);
        let mut spans: Vec<LinkSpan> = sanitize(&escaped, self.links.detect_links(&escaped))
            .into_iter()
            .map(LinkSpan::from)
            .collect();
        // Targets were detected in escaped text; resolve the raw names and
        // escape the (possibly canonical) ids again for the attribute.
        for span in &mut spans {
            span.target_identifier =
                html_escape::decode_html_entities(&span.target_identifier).into_owned();
        }
        self.links.resolve_links(&mut spans, self.project);
        for span in &mut spans {
            span.target_identifier = escape(&span.target_identifier).into_owned();
        }
        let flavor = Html {
            mark_unresolved: self.project.is_some(),
        };
        transform_line(&escaped, &mut spans, &flavor)
    }

    fn close_paragraph(&mut self) {
        if self.paragraph_open {
            self.body.push_str("</p>\n");
            self.paragraph_open = false;
        }
    }

    fn close_list(&mut self) {
        if self.list_open {
            self.body.push_str("</ul>\n");
            self.list_open = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_paragraph();
        self.close_list();
        self.body
    }
}

impl<S: LinkService + ?Sized> SegmentHandler for HtmlSink<'_, S> {
    fn heading(&mut self, level: HeadingLevel, text: &str) {
        self.close_paragraph();
        let n = level.as_u8();
        let inner = self.inline(text);
        self.body.push_str(&format!("<h{n}>{inner}</h{n}>\n"));
    }

    fn list_item(&mut self, text: &str) {
        self.close_paragraph();
        if !self.list_open {
            self.body.push_str("<ul>");
            self.list_open = true;
        }
        let inner = self.inline(text);
        self.body.push_str(&format!("<li>{inner}</li>\n"));
    }

    fn paragraph(&mut self, text: &str) {
        if self.paragraph_open {
            self.body.push(' ');
        } else {
            self.body.push_str("<p>");
            self.paragraph_open = true;
        }
        let inner = self.inline(text.trim_start());
        self.body.push_str(&inner);
    }

    fn blank(&mut self) {
        self.close_paragraph();
        self.close_list();
    }

    fn fence_opened(&mut self, _info: Option<&str>) {
        self.close_paragraph();
    }

    fn code_block(&mut self, info: Option<&str>, content: &str) {
        let class = info
            .map(|i| format!(" class=\"language-{}\"", escape(i)))
            .unwrap_or_default();
        self.body.push_str(&format!(
            "<pre><code{class}>{}</code></pre>\n",
            escape(content)
        ));
    }
}

/// Renders the `<body>` contents for `markdown`.
pub(crate) fn render_body<S: LinkService + ?Sized>(
    markdown: &str,
    links: &S,
    project: Option<&ProjectContext>,
) -> String {
    let mut sink = HtmlSink {
        links,
        project,
        body: String::new(),
        list_open: false,
        paragraph_open: false,
    };
    segment(markdown, &mut sink);
    let body = sink.finish();
    log::debug!("rendered HTML body of {} bytes", body.len());
    body
}
