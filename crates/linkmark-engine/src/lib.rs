pub mod links;
pub mod rendering;

// Re-export key types for easier usage
pub use links::{
    DetectedLink, DocumentRef, LinkService, LinkSpan, ProjectContext, WikiLinkService,
};
pub use rendering::{
    Block, BlockKind, HtmlOptions, Renderer, html::DEFAULT_STYLESHEET, render_to_blocks,
    render_to_html,
};
