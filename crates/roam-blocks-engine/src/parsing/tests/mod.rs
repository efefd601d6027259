//! Pipeline-level tests for the parsing module.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{IndentStyle, MarkdownNode},
    parse_markdown, snapshot,
};

fn parse(md: &str) -> Vec<MarkdownNode> {
    let roots = parse_markdown(md, IndentStyle::default()).roots;
    snapshot::invariants(&roots);
    roots
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n  \n\t\n")]
fn blank_input_is_an_empty_forest(#[case] md: &str) {
    assert!(parse(md).is_empty());
}

#[test]
fn level_jump_never_fails() {
    let roots = parse("- a\n    - b\n- c");
    assert_eq!(
        roots,
        vec![
            MarkdownNode::new("a", 0).with_children(vec![MarkdownNode::new("b", 1)]),
            MarkdownNode::new("c", 0),
        ]
    );
}

#[rstest]
#[case("# Next\n- x")]
#[case("# Next\n        - x")]
#[case("# Next\nx")]
fn heading_after_deep_content_resets_nesting(#[case] tail: &str) {
    let md = format!("- a\n  - b\n    - c\n      - d\n{tail}");
    let roots = parse(&md);
    assert_eq!(roots.len(), 2);
    assert_eq!(
        roots[1],
        MarkdownNode::new("Next", 0)
            .with_heading(1)
            .with_children(vec![MarkdownNode::new("x", 1)])
    );
}

#[test]
fn table_becomes_anchor_with_columns() {
    let roots = parse("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
    assert_eq!(
        roots,
        vec![MarkdownNode::new("{{table}}", 0).with_children(vec![
            MarkdownNode::new("A", 1)
                .with_children(vec![MarkdownNode::new("1", 2), MarkdownNode::new("3", 2)]),
            MarkdownNode::new("B", 1)
                .with_children(vec![MarkdownNode::new("2", 2), MarkdownNode::new("4", 2)]),
        ])]
    );
}

#[test]
fn inline_styles_apply_to_content() {
    let roots = parse("- **bold** and *italic*\n  - ==mark==");
    assert_eq!(roots[0].content, "**bold** and __italic__");
    assert_eq!(roots[0].children[0].content, "^^mark^^");
}

#[test]
fn emphasis_in_table_cells_is_rewritten() {
    let roots = parse("| *A* |\n|---|\n| ==1== |");
    let column = &roots[0].children[0];
    assert_eq!(column.content, "__A__");
    assert_eq!(column.children[0].content, "^^1^^");
}

#[test]
fn bullet_star_is_not_emphasis() {
    let roots = parse("* one *two*\n* three");
    assert_eq!(
        roots,
        vec![
            MarkdownNode::new("one __two__", 0),
            MarkdownNode::new("three", 0)
        ]
    );
}

#[test]
fn four_space_indent_style() {
    let roots = parse_markdown("- a\n    - b\n  - c", IndentStyle::spaces(4).unwrap()).roots;
    assert_eq!(
        roots,
        vec![
            MarkdownNode::new("a", 0).with_children(vec![MarkdownNode::new("b", 1)]),
            MarkdownNode::new("c", 0),
        ]
    );
}
