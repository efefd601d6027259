use serde::{Deserialize, Serialize};

use super::kinds::Marker;
use crate::parsing::rope::span::Span;

/// One logical content unit before it is materialized as a remote block.
///
/// Children are owned by their parent and kept in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownNode {
    /// Text with structural markers (bullets, heading hashes) stripped.
    pub content: String,
    /// Nesting depth; 0 is top level.
    pub level: usize,
    /// Heading size in `1..=3` if the node renders as a heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkdownNode>,
}

impl MarkdownNode {
    pub fn new(content: impl Into<String>, level: usize) -> Self {
        Self {
            content: content.into(),
            level,
            heading: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: u8) -> Self {
        self.heading = Some(heading);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MarkdownNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }
}

impl Drop for MarkdownNode {
    // Flattens the subtree first so nesting depth never reaches the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// What a classified line is, structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#` heading with the raw (unclamped) hash count.
    Heading { hashes: usize },
    /// A line carrying the `{{table}}` container token.
    TableMarker,
    /// A whole-line `**label**`.
    BoldLabel,
    /// A bulleted or numbered list item.
    ListItem { marker: Marker },
    /// Anything else.
    Text,
}

impl LineKind {
    /// Anchors always become roots and collect the lines that follow them.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            LineKind::Heading { .. } | LineKind::TableMarker | LineKind::BoldLabel
        )
    }
}

/// A line that has been classified and is ready for tree building.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Nesting depth implied by leading whitespace alone.
    pub indent_level: usize,
    pub kind: LineKind,
    /// Text with the structural marker removed.
    pub content: String,
}
