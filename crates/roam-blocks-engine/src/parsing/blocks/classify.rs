use crate::parsing::rope::lines::LineRef;

use super::{
    indent::IndentStyle,
    kinds::{BoldLabel, Heading, ListMarker, TableMarker},
    types::{LineClass, LineKind},
};

/// Classifies individual lines for the tree building phase.
///
/// Classification only looks at the line itself. Context-dependent rules
/// (anchor elevation, level clamping) belong to the builder.
pub struct MarkdownLineClassifier {
    indent: IndentStyle,
}

impl MarkdownLineClassifier {
    pub fn new(indent: IndentStyle) -> Self {
        Self { indent }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: heading, table marker, bold label, list item, plain text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end();
        let body = trimmed.trim_start();
        let indent_str = &trimmed[..trimmed.len() - body.len()];

        let (kind, content) = if body.is_empty() {
            (LineKind::Text, "")
        } else if let Some((hashes, text)) = Heading::parse(body) {
            (LineKind::Heading { hashes }, text)
        } else if TableMarker::contains(body) {
            let text = ListMarker::strip(body).map_or(body, |(_, rest)| rest);
            (LineKind::TableMarker, text)
        } else if BoldLabel::matches(body) {
            (LineKind::BoldLabel, body)
        } else if let Some((marker, text)) = ListMarker::strip(body) {
            (LineKind::ListItem { marker }, text)
        } else {
            (LineKind::Text, body)
        };

        log::trace!("classified {:?} as {kind:?}", lr.span);

        LineClass {
            line: lr.span,
            is_blank: body.is_empty(),
            indent_level: self.indent.calculate_depth(indent_str),
            kind,
            content: content.to_string(),
        }
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(IndentStyle::default())
    }
}
