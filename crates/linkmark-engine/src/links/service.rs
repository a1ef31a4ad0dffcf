use crate::rendering::inline::{InlineNode, kinds::WikiLink, parse_inline};

use super::{DetectedLink, DocumentRef, LinkService, LinkSpan, ProjectContext};

/// Finds every `[[target]]` / `[[target|display]]` outside code spans.
pub fn detect_wikilinks(text: &str) -> Vec<DetectedLink> {
    parse_inline(text)
        .into_iter()
        .filter_map(|node| match node {
            InlineNode::WikiLink {
                full,
                target,
                alias,
            } => {
                let target = target.slice(text)?.trim();
                let alias = alias.and_then(|a| a.slice(text));
                Some(DetectedLink {
                    start_index: full.start,
                    length: full.len(),
                    target_identifier: target.to_string(),
                    display_text: WikiLink::display_text(target, alias).to_string(),
                })
            }
            _ => None,
        })
        .collect()
}

/// Default link service: wikilink syntax, resolved by document path, file
/// stem or title (case-insensitive, `.md` optional).
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiLinkService;

impl WikiLinkService {
    fn find<'p>(project: &'p ProjectContext, target: &str) -> Option<&'p DocumentRef> {
        let key = normalize(target);
        let docs = &project.documents;
        docs.iter()
            .find(|d| normalize(d.path.as_str()) == key)
            .or_else(|| docs.iter().find(|d| normalize(&d.title) == key))
            .or_else(|| {
                docs.iter()
                    .find(|d| d.path.file_stem().is_some_and(|s| normalize(s) == key))
            })
    }
}

impl LinkService for WikiLinkService {
    fn detect_links(&self, text: &str) -> Vec<DetectedLink> {
        detect_wikilinks(text)
    }

    fn resolve_links(&self, links: &mut [LinkSpan], project: Option<&ProjectContext>) {
        let Some(project) = project else {
            return;
        };
        for link in links.iter_mut() {
            match Self::find(project, &link.target_identifier) {
                Some(doc) => {
                    link.target_identifier = doc.id().to_string();
                    link.resolved = true;
                }
                None => {
                    log::debug!(
                        "link target {:?} not found in project {:?}",
                        link.target_identifier,
                        project.name
                    );
                    link.resolved = false;
                }
            }
        }
    }
}

fn normalize(s: &str) -> String {
    let s = s.trim().replace('\\', "/").to_lowercase();
    match s.strip_suffix(".md") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}
