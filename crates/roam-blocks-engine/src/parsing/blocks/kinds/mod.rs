//! # Line Kinds
//!
//! Each structural marker owns its syntax here; the classifier only calls
//! into these types and never hardcodes `#`, `-` or `{{table}}` itself.
//!
//! - **`Heading`**: `#`..`###` followed by whitespace
//! - **`ListMarker`**: `-`, `*`, `+` and `1.` style bullets
//! - **`BoldLabel`**: a whole line wrapped in `**`
//! - **`TableMarker`**: the `{{table}}` container token

pub mod bold_label;
pub mod heading;
pub mod list_marker;
pub mod table_marker;

pub use bold_label::BoldLabel;
pub use heading::Heading;
pub use list_marker::{ListMarker, Marker};
pub use table_marker::TableMarker;
