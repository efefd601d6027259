use std::fmt::Write;

use crate::parsing::blocks::MarkdownNode;

/// Renders a forest as one line per node: indentation, level, optional
/// heading and the debug-quoted content.
///
/// ```text
/// L0 H1 "Title"
///   L1 "a"
///     L2 "b"
/// ```
pub fn render_tree(roots: &[MarkdownNode]) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&MarkdownNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let pad = "  ".repeat(depth);
        let heading = node
            .heading
            .map(|h| format!(" H{h}"))
            .unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{pad}L{}{heading} {:?}", node.level, node.content);
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}
