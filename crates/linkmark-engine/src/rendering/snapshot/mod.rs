//! # Snapshot Testing Support
//!
//! Utilities for testing the renderers via snapshot assertions and invariant
//! checks.
//!
//! - **`normalize`**: turns a block list into a stable text outline for
//!   `insta` snapshots
//! - **`invariants`**: runtime checks for renderer correctness (every link
//!   span covers its display text, spans ordered, code blocks link-free)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
