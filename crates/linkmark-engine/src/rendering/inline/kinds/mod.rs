//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser reads these
//! constants; it never hardcodes `[[` or `` ` ``.
//!
//! - **`CodeSpan`**: `TICK`, a raw zone that suppresses other processing
//! - **`WikiLink`**: `OPEN`, `CLOSE`, `ALIAS` and the display-text rule

pub mod code_span;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use wikilink::WikiLink;
