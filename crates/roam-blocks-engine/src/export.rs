//! # Markdown Export
//!
//! The reverse direction: flat block rows fetched from the remote graph are
//! reassembled into a forest and printed as outline markdown.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::parsing::blocks::{MarkdownNode, TreeBuilder, kinds::Heading};

/// One block as returned by a page query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRow {
    pub uid: String,
    pub string: String,
    pub order: u32,
    #[serde(default)]
    pub parent_uid: Option<String>,
    #[serde(default)]
    pub heading: Option<u8>,
}

/// Rebuilds the block forest of a page from its flat rows.
///
/// Rows without a parent, or whose parent is the page itself, are roots.
/// Siblings are sorted by `order`. Rows whose parent is not among the rows
/// are dropped.
pub fn assemble_page(page_uid: &str, rows: &[BlockRow]) -> Vec<MarkdownNode> {
    let known: HashSet<&str> = rows.iter().map(|r| r.uid.as_str()).collect();
    let mut roots = vec![];
    let mut children: HashMap<&str, Vec<&BlockRow>> = HashMap::new();

    for row in rows {
        match row.parent_uid.as_deref() {
            None => roots.push(row),
            Some(parent) if parent == page_uid => roots.push(row),
            Some(parent) if known.contains(parent) => {
                children.entry(parent).or_default().push(row)
            }
            Some(parent) => {
                log::debug!("dropping block {} with unknown parent {parent}", row.uid)
            }
        }
    }

    roots.sort_by_key(|r| r.order);
    for siblings in children.values_mut() {
        siblings.sort_by_key(|r| r.order);
    }

    // A pre-order walk feeds the builder the same way outline import does:
    // every row arrives right after its parent's subtree so far.
    let mut builder = TreeBuilder::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(&BlockRow, usize)> = roots.iter().rev().map(|&row| (row, 0)).collect();

    while let Some((row, level)) = stack.pop() {
        // Duplicate uids would otherwise let a row become its own descendant.
        if !visited.insert(row.uid.as_str()) {
            log::debug!("skipping repeated block uid {}", row.uid);
            continue;
        }

        let heading = row.heading.filter(|&h| Heading::is_valid_level(h));
        builder.insert(level, row.string.clone(), heading);
        if let Some(list) = children.get(row.uid.as_str()) {
            stack.extend(list.iter().rev().map(|&child| (child, level + 1)));
        }
    }

    builder.finish()
}

/// Prints a forest as outline markdown, two spaces per level.
///
/// Heading nodes print as `## text`, everything else as `- text`.
pub fn render_markdown(nodes: &[MarkdownNode]) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&MarkdownNode, usize)> = nodes.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        out.push_str(&"  ".repeat(depth));
        match node.heading {
            Some(h) => {
                out.push_str(&"#".repeat(usize::from(h)));
                out.push(' ');
            }
            None => out.push_str("- "),
        }
        out.push_str(&node.content);
        out.push('\n');
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

/// A whole page: the title as a top heading, a blank line, then the blocks.
pub fn render_page(title: &str, nodes: &[MarkdownNode]) -> String {
    format!("# {title}\n\n{}", render_markdown(nodes))
}
