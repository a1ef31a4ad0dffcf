use super::escape::escape;

/// Built-in stylesheet embedded in every exported document.
pub const DEFAULT_STYLESHEET: &str = r#"body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  line-height: 1.6;
  max-width: 48rem;
  margin: 2rem auto;
  padding: 0 1rem;
  color: #24292f;
}
h1, h2, h3, h4 { line-height: 1.25; margin: 1.5em 0 0.5em; }
h1 { font-size: 2em; border-bottom: 1px solid #d0d7de; }
h2 { font-size: 1.5em; }
pre { background: #f6f8fa; padding: 1em; overflow-x: auto; border-radius: 6px; }
code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 0.9em; }
.doc-link { color: #0969da; text-decoration: underline dotted; }
.doc-link.unresolved { color: #cf222e; }"#;

/// Presentation settings for a standalone HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub title: String,
    pub stylesheet: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Document".to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = css.into();
        self
    }
}

/// Wraps a rendered body in a complete document (head, style, body).
pub fn wrap_document(body: &str, options: &HtmlOptions) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(&options.title),
        options.stylesheet,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_still_makes_a_document() {
        let doc = wrap_document("", &HtmlOptions::default());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("<body>\n</body>"));
    }

    #[test]
    fn title_is_escaped() {
        let doc = wrap_document("", &HtmlOptions::default().with_title("A & B"));
        assert!(doc.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn custom_stylesheet_replaces_default() {
        let doc = wrap_document("", &HtmlOptions::default().with_stylesheet("p{}"));
        assert!(doc.contains("<style>\np{}\n</style>"));
        assert!(!doc.contains(".doc-link"));
    }
}
