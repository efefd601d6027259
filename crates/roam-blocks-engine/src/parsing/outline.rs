use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::blocks::{MarkdownNode, TreeBuilder, kinds::Heading};

/// One entry of an explicit outline, as supplied by a caller that already
/// knows the structure (no markdown parsing involved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub text: String,
    /// 1-based nesting level; 1 is top level.
    pub level: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u8>,
}

impl OutlineItem {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
            heading: None,
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: u8) -> Self {
        self.heading = Some(heading);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("Invalid block hierarchy: item {index} at level {level} has no parent")]
    InvalidHierarchy { index: usize, level: usize },

    #[error("Invalid heading: item {index} has heading {heading}, expected 1..=3")]
    InvalidHeading { index: usize, heading: u8 },
}

/// Builds a forest from an explicit outline.
///
/// Unlike markdown parsing this is strict: an item whose parent level is not
/// open is an error rather than being clamped into place.
pub fn build_outline(items: &[OutlineItem]) -> Result<Vec<MarkdownNode>, OutlineError> {
    let mut builder = TreeBuilder::new();

    for (index, item) in items.iter().enumerate() {
        if let Some(heading) = item.heading
            && !Heading::is_valid_level(heading)
        {
            return Err(OutlineError::InvalidHeading { index, heading });
        }
        let Some(level) = item.level.checked_sub(1) else {
            return Err(OutlineError::InvalidHierarchy {
                index,
                level: item.level,
            });
        };

        let placement = builder.insert(level, item.text.clone(), item.heading);
        if placement.was_clamped() {
            return Err(OutlineError::InvalidHierarchy {
                index,
                level: item.level,
            });
        }
    }

    Ok(builder.finish())
}
