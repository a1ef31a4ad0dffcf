pub mod blocks;
pub mod html;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;
mod structured;

use crate::links::{LinkService, ProjectContext, WikiLinkService};

pub use blocks::{Block, BlockKind};
pub use html::HtmlOptions;

/// Markdown renderer bound to a link collaborator.
///
/// Holds nothing but the collaborator reference, so one renderer can serve
/// any number of concurrent calls.
pub struct Renderer<'s, S: LinkService + ?Sized = WikiLinkService> {
    links: &'s S,
}

impl<'s, S: LinkService + ?Sized> Renderer<'s, S> {
    pub fn new(links: &'s S) -> Self {
        Self { links }
    }

    /// Renders the block sequence for the editor view.
    ///
    /// Never fails. Empty or whitespace-only input yields no blocks.
    pub fn render_to_blocks(
        &self,
        markdown: &str,
        project: Option<&ProjectContext>,
    ) -> Vec<Block> {
        structured::render_blocks(markdown, self.links, project)
    }

    /// Renders a complete HTML document with the default title and stylesheet.
    pub fn render_to_html(&self, markdown: &str) -> String {
        self.render_to_html_with(markdown, &HtmlOptions::default(), None)
    }

    /// Renders a complete HTML document. With a project, resolved and
    /// unresolved links are styled differently.
    pub fn render_to_html_with(
        &self,
        markdown: &str,
        options: &HtmlOptions,
        project: Option<&ProjectContext>,
    ) -> String {
        let body = html::render_body(markdown, self.links, project);
        html::wrap_document(&body, options)
    }
}

/// [`Renderer::render_to_blocks`] with the default [`WikiLinkService`].
pub fn render_to_blocks(markdown: &str, project: Option<&ProjectContext>) -> Vec<Block> {
    Renderer::new(&WikiLinkService).render_to_blocks(markdown, project)
}

/// [`Renderer::render_to_html`] with the default [`WikiLinkService`].
pub fn render_to_html(markdown: &str) -> String {
    Renderer::new(&WikiLinkService).render_to_html(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{DetectedLink, LinkSpan};

    /// Detects `@name` mentions instead of wikilinks.
    struct MentionService;

    impl LinkService for MentionService {
        fn detect_links(&self, text: &str) -> Vec<DetectedLink> {
            text.match_indices('@')
                .map(|(i, _)| {
                    let name: String = text[i + 1..]
                        .chars()
                        .take_while(|c| c.is_alphanumeric())
                        .collect();
                    DetectedLink {
                        start_index: i,
                        length: name.len() + 1,
                        target_identifier: name.clone(),
                        display_text: name,
                    }
                })
                .collect()
        }

        fn resolve_links(&self, links: &mut [LinkSpan], _project: Option<&ProjectContext>) {
            for link in links {
                link.resolved = link.target_identifier == "ann";
            }
        }
    }

    #[test]
    fn renderer_uses_injected_service() {
        let renderer = Renderer::new(&MentionService);
        let blocks = renderer.render_to_blocks("ping @ann and **@bob**", None);
        let b = &blocks[0];
        assert_eq!(b.content, "ping ann and bob");
        assert_eq!(b.links.len(), 2);
        assert!(b.links[0].resolved);
        assert!(!b.links[1].resolved);
        snapshot::invariants(&blocks);
    }

    #[test]
    fn strong_around_a_link_is_applied_in_both_outputs() {
        let blocks = render_to_blocks("**[[x]]**", None);
        assert_eq!(blocks[0].content, "x");
        assert_eq!(blocks[0].links[0].range(), 0..1);

        let html = render_to_html("**[[x]]**");
        assert!(html.contains(
            "<p><strong><span class=\"doc-link\" data-target=\"x\">x</span></strong></p>"
        ));
    }

    #[test]
    fn free_functions_use_wikilinks() {
        let blocks = render_to_blocks("[[Home]]", None);
        assert_eq!(blocks[0].content, "Home");
        assert!(render_to_html("[[Home]]").contains("data-target=\"Home\""));
    }

    #[test]
    fn renderer_is_shareable_across_threads() {
        let renderer = Renderer::new(&WikiLinkService);
        std::thread::scope(|s| {
            let a = s.spawn(|| renderer.render_to_blocks("# A [[x]]", None));
            let b = s.spawn(|| renderer.render_to_html("# B [[y]]"));
            assert_eq!(a.join().unwrap()[0].content, "A x");
            assert!(b.join().unwrap().contains("<h1>B "));
        });
    }
}
