//! # Inline Kinds
//!
//! Inline types that own their delimiters, both the markdown spelling they
//! are recognised by and the spelling the remote graph expects.
//!
//! - **`CodeSpan`**: backtick runs, a raw zone that is copied untouched
//! - **`Emphasis`**: `*x*` / `_x_` in, `__x__` out
//! - **`Highlight`**: `==x==` in, `^^x^^` out

pub mod code_span;
pub mod emphasis;
pub mod highlight;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use highlight::Highlight;
