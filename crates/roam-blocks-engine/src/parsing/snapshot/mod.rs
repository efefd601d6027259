//! # Snapshot Testing Support
//!
//! Utilities for testing conversions via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: prints a forest as stable indented text for `insta`
//!   snapshot testing
//! - **`invariants`**: runtime checks for builder correctness (levels follow
//!   nesting, headings in range) and for batch wiring (unique uids, parents
//!   created before children)
//!
//! Parsing behavior is defined by the fixture snapshots rather than a
//! separate formal grammar.

pub mod invariants;
pub mod render;

pub use invariants::{check as invariants, check_batch};
pub use render::render_tree;
