use super::{
    kinds::Heading,
    types::{LineClass, LineKind, MarkdownNode},
};

/// Elevation state for lines that follow an anchor root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnchorState {
    /// The current root is not an anchor; indentation is taken as-is.
    None,
    /// An anchor root was just opened and no content line followed yet.
    Opened,
    /// Content under an anchor, shifted by `offset` levels.
    ///
    /// The offset is 1 when the first line under the anchor was flush left,
    /// so `# H` / `- a` / `  - b` nests `b` under `a` instead of beside it.
    Section { offset: usize },
}

#[derive(Debug)]
struct PendingNode {
    content: String,
    heading: Option<u8>,
    level: usize,
    children: Vec<usize>,
}

/// Where a node ended up relative to where it asked to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub requested: usize,
    pub resolved: usize,
}

impl Placement {
    pub fn was_clamped(&self) -> bool {
        self.requested != self.resolved
    }
}

/// Builds a [`MarkdownNode`] forest from classified lines.
///
/// Nodes live in an arena; `open[level]` is the index of the most recent node
/// at that level. A node at level L truncates `open` to L entries, so closing
/// deeper branches is a length clamp.
pub struct TreeBuilder {
    nodes: Vec<PendingNode>,
    roots: Vec<usize>,
    open: Vec<usize>,
    anchor: AnchorState,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            roots: vec![],
            open: vec![],
            anchor: AnchorState::None,
        }
    }

    /// Feeds one classified line. Blank lines are skipped.
    pub fn push(&mut self, c: &LineClass) {
        if c.is_blank {
            return;
        }

        if c.kind.is_anchor() {
            let heading = match c.kind {
                LineKind::Heading { hashes } => Some(Heading::clamp(hashes)),
                _ => None,
            };
            self.insert(0, c.content.clone(), heading);
            self.anchor = AnchorState::Opened;
            return;
        }

        let level = match self.anchor {
            AnchorState::None => c.indent_level,
            AnchorState::Opened => {
                let offset = usize::from(c.indent_level == 0);
                self.anchor = AnchorState::Section { offset };
                (c.indent_level + offset).max(1)
            }
            AnchorState::Section { offset } => (c.indent_level + offset).max(1),
        };

        let placement = self.insert(level, c.content.clone(), None);
        if placement.was_clamped() {
            log::debug!(
                "line at {:?} asked for level {} but was placed at level {}",
                c.line,
                placement.requested,
                placement.resolved
            );
        }
    }

    /// Inserts a node at `level`, clamping to one below the deepest open
    /// node when its parent level is not open.
    ///
    /// A node that resolves to level 0 becomes a new root and closes every
    /// open branch.
    pub fn insert(&mut self, level: usize, content: String, heading: Option<u8>) -> Placement {
        let resolved = level.min(self.open.len());
        let idx = self.nodes.len();
        self.nodes.push(PendingNode {
            content,
            heading,
            level: resolved,
            children: vec![],
        });

        if resolved == 0 {
            self.roots.push(idx);
            self.anchor = AnchorState::None;
        } else {
            let parent = self.open[resolved - 1];
            self.nodes[parent].children.push(idx);
        }
        self.open.truncate(resolved);
        self.open.push(idx);

        Placement {
            requested: level,
            resolved,
        }
    }

    /// Materializes the arena into an owned forest.
    ///
    /// Children are always pushed after their parent, so walking the arena
    /// backwards sees every child before the node that owns it.
    pub fn finish(mut self) -> Vec<MarkdownNode> {
        let mut built: Vec<Option<MarkdownNode>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);

        for idx in (0..self.nodes.len()).rev() {
            let pending = &mut self.nodes[idx];
            let children = pending
                .children
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[idx] = Some(MarkdownNode {
                content: std::mem::take(&mut pending.content),
                level: pending.level,
                heading: pending.heading,
                children,
            });
        }

        self.roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{IndentStyle, MarkdownLineClassifier},
        rope::lines_with_spans,
    };
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn build(md: &str) -> Vec<MarkdownNode> {
        let classifier = MarkdownLineClassifier::new(IndentStyle::default());
        let mut builder = TreeBuilder::new();
        for lr in lines_with_spans(&Rope::from(md)) {
            builder.push(&classifier.classify(&lr));
        }
        builder.finish()
    }

    fn leaf(content: &str, level: usize) -> MarkdownNode {
        MarkdownNode::new(content, level)
    }

    #[test]
    fn nested_list() {
        let roots = build("- a\n  - b\n    - c\n  - d\n- e");
        assert_eq!(
            roots,
            vec![
                leaf("a", 0).with_children(vec![
                    leaf("b", 1).with_children(vec![leaf("c", 2)]),
                    leaf("d", 1),
                ]),
                leaf("e", 0),
            ]
        );
    }

    #[test]
    fn level_jump_clamps_to_deepest_open_node() {
        let roots = build("- a\n    - b\n- c");
        assert_eq!(
            roots,
            vec![leaf("a", 0).with_children(vec![leaf("b", 1)]), leaf("c", 0)]
        );
    }

    #[test]
    fn indented_first_line_becomes_root() {
        let roots = build("    - orphan\n      - child");
        assert_eq!(
            roots,
            vec![leaf("orphan", 0).with_children(vec![leaf("child", 1)])]
        );
    }

    #[test]
    fn shallower_sibling_closes_deeper_branches() {
        let roots = build("- a\n  - b\n    - c\n  - d\n    - e");
        let a = &roots[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].children, vec![leaf("c", 2)]);
        assert_eq!(a.children[1].children, vec![leaf("e", 2)]);
    }

    #[test]
    fn heading_collects_flush_left_list() {
        let roots = build("# Title\n- a\n  - b\n- c");
        assert_eq!(
            roots,
            vec![leaf("Title", 0).with_heading(1).with_children(vec![
                leaf("a", 1).with_children(vec![leaf("b", 2)]),
                leaf("c", 1),
            ])]
        );
    }

    #[test]
    fn heading_collects_indented_list() {
        let roots = build("# Title\n  - a\n    - b\n- c");
        assert_eq!(
            roots,
            vec![leaf("Title", 0).with_heading(1).with_children(vec![
                leaf("a", 1).with_children(vec![leaf("b", 2)]),
                leaf("c", 1),
            ])]
        );
    }

    #[test]
    fn heading_resets_deep_nesting() {
        let roots = build("- a\n  - b\n    - c\n## Next\n          - x");
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].heading, Some(2));
        assert_eq!(roots[1].level, 0);
        assert_eq!(roots[1].children, vec![leaf("x", 1)]);
    }

    #[test]
    fn consecutive_headings_are_siblings() {
        let roots = build("# One\n## Two\n- under two");
        assert_eq!(
            roots,
            vec![
                leaf("One", 0).with_heading(1),
                leaf("Two", 0)
                    .with_heading(2)
                    .with_children(vec![leaf("under two", 1)]),
            ]
        );
    }

    #[test]
    fn deep_heading_clamps_to_three() {
        let roots = build("##### Small");
        assert_eq!(roots, vec![leaf("Small", 0).with_heading(3)]);
    }

    #[test]
    fn bold_label_acts_as_anchor() {
        let roots = build("**Notes**\n- one\n- two");
        assert_eq!(
            roots,
            vec![leaf("**Notes**", 0).with_children(vec![leaf("one", 1), leaf("two", 1)])]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let roots = build("- a\n\n   \n- b\n");
        assert_eq!(roots, vec![leaf("a", 0), leaf("b", 0)]);
    }

    #[test]
    fn insert_reports_clamping() {
        let mut builder = TreeBuilder::new();
        assert!(!builder.insert(0, "a".into(), None).was_clamped());
        let placement = builder.insert(3, "b".into(), None);
        assert_eq!(
            placement,
            Placement {
                requested: 3,
                resolved: 1
            }
        );
    }

    #[test]
    fn empty_builder_finishes_empty() {
        assert!(TreeBuilder::new().finish().is_empty());
    }
}
