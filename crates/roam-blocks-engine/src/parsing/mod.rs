pub mod blocks;
pub mod inline;
pub mod outline;
pub mod rope;
pub mod snapshot;
pub mod table;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{IndentStyle, MarkdownLineClassifier, MarkdownNode, TreeBuilder};
use rope::lines_with_spans;

#[derive(Debug, Default)]
pub struct ParsedDoc {
    pub roots: Vec<MarkdownNode>,
}

/// Builds the node forest for already-normalized outline text.
pub fn parse_document(rope: &Rope, indent: IndentStyle) -> ParsedDoc {
    let classifier = MarkdownLineClassifier::new(indent);
    let mut builder = TreeBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        roots: builder.finish(),
    }
}

/// Full text pipeline: inline styles, then tables, then tree building.
pub fn parse_markdown(text: &str, indent: IndentStyle) -> ParsedDoc {
    let styled = inline::normalize_inline_styles(text);
    let tabled = table::normalize_tables(&styled, indent);
    parse_document(&Rope::from(tabled.as_ref()), indent)
}
