//! # Inline Transformation
//!
//! Turns one marker-stripped line into output text.
//!
//! ## Pipeline
//!
//! 1. Cross-document links are detected on the untransformed line (through
//!    [`crate::links::LinkService`], which uses `parser` by default)
//! 2. `transform` masks those links, code spans and `[text](url)` targets
//!    as placeholder tokens, runs the ordered `rules` table over the whole
//!    line, then expands the tokens and relocates each link
//! 3. For the structured view, `reconcile` swaps each link's syntax for its
//!    display text, rightmost first
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, CodeSpan, WikiLink)
//! - **`kinds`**: Delimiter-owning types (CodeSpan, WikiLink)
//! - **`cursor`**: `Cursor` for byte scanning with position tracking
//! - **`parser`**: `parse_inline()` / `split_code_spans()`
//! - **`rules`**: the ordered substitution table
//! - **`flavor`**: `PlainText` and `Html` output representations
//! - **`transform`**: `transform_line()` with link relocation
//! - **`reconcile`**: descending-order display-text splicing

pub mod cursor;
pub mod flavor;
pub mod kinds;
pub mod parser;
pub mod reconcile;
pub mod rules;
pub mod transform;
pub mod types;

pub use flavor::{Html, InlineFlavor, PlainText};
pub use parser::parse_inline;
pub use reconcile::reconcile;
pub use transform::{transform_line, transform_text};
pub use types::InlineNode;
