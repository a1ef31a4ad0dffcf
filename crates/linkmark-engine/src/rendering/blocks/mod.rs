//! # Block Segmentation
//!
//! Two-phase, line-oriented segmentation shared by both renderers.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    from its leading characters alone (fence, heading, list item, blank,
//!    paragraph).
//!
//! 2. **Segmentation** (`segmenter`): a `Segmenter` tracks fence state and
//!    hands each classified line group to a `SegmentHandler`.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types owning their markers (CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`segmenter`**: `Segmenter` state machine and the `SegmentHandler` trait
//! - **`types`**: Output types for the structured view (`Block`, `BlockKind`)
//!
//! ## Key Invariants
//!
//! - Heading markers are tested longest first
//! - Fenced code blocks are raw zones: no classification or inline parsing inside
//! - An unterminated fence still produces its code block at end of input

pub mod classify;
pub mod kinds;
pub mod segmenter;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::HeadingLevel;
pub use segmenter::{SegmentHandler, Segmenter, segment};
pub use types::{Block, BlockKind};
