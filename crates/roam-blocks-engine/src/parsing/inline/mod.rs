//! # Inline Style Normalization
//!
//! Rewrites common markdown inline markup into the remote graph's native
//! spelling before any structural parsing happens.
//!
//! ## Rewrites
//!
//! - `**bold**` passes through unchanged (already native)
//! - `*italic*` and `_italic_` become `__italic__`
//! - `==highlight==` becomes `^^highlight^^`
//!
//! ## Raw Zones
//!
//! Backtick code spans are copied verbatim; `` `a*b*c` `` stays as it is.
//! Delimiters only pair within one line and must be flanking, so list
//! bullets (`* item`) and arithmetic (`2 * 3 * 4`) are left alone.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants per inline kind
//! - **`cursor`**: byte cursor with run and neighbour lookups
//! - **`styles`**: `normalize_inline_styles()` entry point

pub mod cursor;
pub mod kinds;
pub mod styles;

pub use styles::normalize_inline_styles;
