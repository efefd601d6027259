//! # Conversion
//!
//! Entry points that take caller input all the way to a [`Batch`]:
//!
//! ```text
//! markdown ─► parse_markdown ─┐
//!                             ├─► linearize ─► Batch
//! outline ──► build_outline ──┘
//! ```
//!
//! Everything a conversion depends on arrives through [`ConvertOptions`].

use thiserror::Error;

use crate::{
    actions::{Batch, BlockOrder, UidStrategy, linearize},
    parsing::{
        blocks::{IndentStyle, MarkdownLineClassifier, MarkdownNode, kinds::Heading},
        inline::normalize_inline_styles,
        outline::{OutlineError, OutlineItem, build_outline},
        parse_markdown,
        rope::{LineRef, Span},
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Parent uid must not be blank")]
    BlankParent,

    #[error("Indent width must be at least 1")]
    ZeroIndent,

    #[error("Invalid heading level {0}: expected 1..=3")]
    InvalidHeading(u8),

    #[error("Conversion produced no blocks")]
    NoBlocks,

    #[error(transparent)]
    Outline(#[from] OutlineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces per nesting level in the input.
    pub indent_width: usize,
    /// Placement of the top-level blocks under the parent.
    pub order: BlockOrder,
    /// Turns the first non-blank line into a heading of this size.
    pub heading: Option<u8>,
    pub uid_strategy: UidStrategy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent_width: IndentStyle::DEFAULT_WIDTH,
            order: BlockOrder::default(),
            heading: None,
            uid_strategy: UidStrategy::default(),
        }
    }
}

impl ConvertOptions {
    pub fn indent_style(&self) -> Result<IndentStyle, ConvertError> {
        IndentStyle::spaces(self.indent_width).ok_or(ConvertError::ZeroIndent)
    }

    fn validate_heading(&self) -> Result<(), ConvertError> {
        match self.heading {
            Some(h) if !Heading::is_valid_level(h) => Err(ConvertError::InvalidHeading(h)),
            _ => Ok(()),
        }
    }
}

/// Parses markdown into a node forest, honoring the first-line heading.
pub fn markdown_to_nodes(
    text: &str,
    options: &ConvertOptions,
) -> Result<Vec<MarkdownNode>, ConvertError> {
    let indent = options.indent_style()?;
    options.validate_heading()?;

    let Some(heading) = options.heading else {
        return Ok(parse_markdown(text, indent).roots);
    };
    let Some((first, rest)) = split_first_line(text) else {
        return Ok(vec![]);
    };

    let line = LineRef {
        span: Span {
            start: first.start,
            end: first.end,
        },
        text: normalize_inline_styles(&text[first.start..first.end]),
    };
    let content = MarkdownLineClassifier::new(indent).classify(&line).content;

    let mut nodes = vec![MarkdownNode::new(content, 0).with_heading(heading)];
    nodes.extend(parse_markdown(rest, indent).roots);
    Ok(nodes)
}

/// Byte range of the first non-blank line, and the text after it.
fn split_first_line(text: &str) -> Option<(std::ops::Range<usize>, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let end = offset + line.len();
        if !line.trim().is_empty() {
            return Some((offset..end, &text[end..]));
        }
        offset = end;
    }
    None
}

/// Converts markdown into the batch of actions that recreates it under
/// `parent_uid`.
///
/// Blank input is an empty batch, not an error.
pub fn convert_markdown(
    text: &str,
    parent_uid: &str,
    options: &ConvertOptions,
) -> Result<Batch, ConvertError> {
    check_parent(parent_uid)?;
    let nodes = markdown_to_nodes(text, options)?;
    convert_nodes(&nodes, parent_uid, options)
}

/// Converts an explicit outline. Item text is used verbatim.
pub fn convert_outline(
    items: &[OutlineItem],
    parent_uid: &str,
    options: &ConvertOptions,
) -> Result<Batch, ConvertError> {
    check_parent(parent_uid)?;
    let nodes = build_outline(items)?;
    convert_nodes(&nodes, parent_uid, options)
}

/// Linearizes an already built forest.
pub fn convert_nodes(
    nodes: &[MarkdownNode],
    parent_uid: &str,
    options: &ConvertOptions,
) -> Result<Batch, ConvertError> {
    check_parent(parent_uid)?;
    let mut uids = options.uid_strategy.source();
    let actions = linearize(nodes, parent_uid, options.order, uids.as_mut());
    log::debug!(
        "linearized {} roots into {} actions under {parent_uid}",
        nodes.len(),
        actions.len()
    );
    Ok(Batch::new(actions))
}

fn check_parent(parent_uid: &str) -> Result<(), ConvertError> {
    if parent_uid.trim().is_empty() {
        return Err(ConvertError::BlankParent);
    }
    Ok(())
}
