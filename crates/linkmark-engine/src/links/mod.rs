//! Cross-document link detection and resolution.
//!
//! The renderer consumes links only through [`LinkService`]. The bundled
//! [`WikiLinkService`] handles `[[target]]` / `[[target|display]]` syntax and
//! resolves targets against a [`ProjectContext`].

pub mod project;
pub mod service;

use std::ops::Range;

use serde::Serialize;

pub use project::{DocumentRef, ProjectContext};
pub use service::{WikiLinkService, detect_wikilinks};

/// A reference found by [`LinkService::detect_links`], measured in the text
/// it was detected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLink {
    pub start_index: usize,
    pub length: usize,
    pub target_identifier: String,
    pub display_text: String,
}

/// A located, displayable cross-document reference inside a block.
///
/// Once rendering finishes, `start_index` and `length` are byte offsets into
/// the block's final `content`, covering exactly `display_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpan {
    pub start_index: usize,
    pub length: usize,
    pub display_text: String,
    pub target_identifier: String,
    pub resolved: bool,
}

impl LinkSpan {
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.length
    }
}

impl From<DetectedLink> for LinkSpan {
    fn from(d: DetectedLink) -> Self {
        Self {
            start_index: d.start_index,
            length: d.length,
            display_text: d.display_text,
            target_identifier: d.target_identifier,
            resolved: false,
        }
    }
}

/// The link-detection/resolution collaborator.
///
/// Implementations must be safe to call from concurrent renders.
pub trait LinkService: Send + Sync {
    /// Finds references in `text`: non-overlapping, left to right, offsets
    /// into `text`.
    fn detect_links(&self, text: &str) -> Vec<DetectedLink>;

    /// Sets `resolved` on each link and may rewrite `target_identifier` to a
    /// canonical id. With no project every link stays unresolved.
    fn resolve_links(&self, links: &mut [LinkSpan], project: Option<&ProjectContext>);
}

/// Keeps only detections that index valid, ordered, non-overlapping,
/// char-boundary ranges of `text` with something to display.
///
/// Anything else is logged and discarded; the renderer never indexes with an
/// unchecked range.
pub fn sanitize(text: &str, mut detected: Vec<DetectedLink>) -> Vec<DetectedLink> {
    detected.sort_by_key(|d| d.start_index);
    let mut next_free = 0;
    detected.retain(|d| {
        let end = d.start_index.saturating_add(d.length);
        let valid = d.length > 0
            && !d.display_text.is_empty()
            && d.start_index >= next_free
            && text.get(d.start_index..end).is_some();
        if valid {
            next_free = end;
        } else {
            log::warn!(
                "discarding malformed link detection {:?} at {}..{} (text is {} bytes)",
                d.target_identifier,
                d.start_index,
                end,
                text.len()
            );
        }
        valid
    });
    detected
}
