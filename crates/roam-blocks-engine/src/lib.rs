//! Converts markdown and explicit outlines into ordered `create-block`
//! batches for a remote block graph, and renders fetched blocks back to
//! markdown.

pub mod actions;
pub mod convert;
pub mod export;
pub mod parsing;

// Re-export key types for easier usage
pub use actions::{Batch, BlockAction, BlockOrder, UidSource, UidStrategy};
pub use convert::{
    ConvertError, ConvertOptions, convert_markdown, convert_nodes, convert_outline,
    markdown_to_nodes,
};
pub use export::{BlockRow, assemble_page, render_markdown, render_page};
pub use parsing::{
    blocks::{IndentStyle, MarkdownNode},
    outline::{OutlineError, OutlineItem, build_outline},
    parse_markdown,
    table::has_markdown_table,
};
