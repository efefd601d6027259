//! # Block Parsing
//!
//! Two-phase conversion of outline text into a [`MarkdownNode`] forest.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts only: indentation depth, structural kind, and the
//!    content with its marker stripped.
//!
//! 2. **Tree Construction** (`builder`): a `TreeBuilder` keeps the open node
//!    per level and attaches every line to exactly one parent.
//!
//! ## Modules
//!
//! - **`types`**: `MarkdownNode`, `LineClass`, `LineKind`
//! - **`kinds`**: marker syntax owned per kind (heading, list, bold label, table)
//! - **`indent`**: `IndentStyle`, columns per nesting level
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `TreeBuilder`
//!
//! ## Key Invariants
//!
//! - Headings, table markers and bold labels are anchors: always level 0,
//!   and every following line nests under them until the next anchor
//! - A child's level is always its parent's level + 1
//! - Malformed indentation never fails and never drops a line

pub mod builder;
pub mod classify;
pub mod indent;
pub mod kinds;
pub mod types;

pub use builder::{Placement, TreeBuilder};
pub use classify::MarkdownLineClassifier;
pub use indent::IndentStyle;
pub use types::{LineClass, LineKind, MarkdownNode};
