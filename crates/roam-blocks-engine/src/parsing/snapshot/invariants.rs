use std::collections::HashSet;

use crate::{
    actions::BlockAction,
    parsing::blocks::{MarkdownNode, kinds::Heading},
};

/// Asserts the structural invariants of a built forest.
///
/// Roots sit at level 0, every child sits exactly one level below its
/// parent, and headings are in `1..=3`.
pub fn check(roots: &[MarkdownNode]) {
    for root in roots {
        assert_eq!(root.level, 0, "root {:?} not at level 0", root.content);
    }

    let mut stack: Vec<&MarkdownNode> = roots.iter().collect();
    while let Some(node) = stack.pop() {
        if let Some(h) = node.heading {
            assert!(
                Heading::is_valid_level(h),
                "heading {h} out of range on {:?}",
                node.content
            );
        }
        for child in &node.children {
            assert_eq!(
                child.level,
                node.level + 1,
                "child {:?} at level {} under parent {:?} at level {}",
                child.content,
                child.level,
                node.content,
                node.level
            );
            stack.push(child);
        }
    }
}

/// Asserts that a linearized batch is wired correctly.
///
/// Every uid is unique, and every parent uid is either `parent_uid` or the
/// uid of an action emitted earlier in the batch.
pub fn check_batch(actions: &[BlockAction], parent_uid: &str) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (i, action) in actions.iter().enumerate() {
        assert!(
            action.parent_uid == parent_uid || seen.contains(action.parent_uid.as_str()),
            "action {i} references parent {:?} before it was created",
            action.parent_uid
        );
        assert!(
            seen.insert(action.uid.as_str()),
            "duplicate uid {:?} at action {i}",
            action.uid
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BlockOrder;

    fn action(uid: &str, parent: &str) -> BlockAction {
        BlockAction {
            uid: uid.into(),
            parent_uid: parent.into(),
            order: BlockOrder::Last,
            text: String::new(),
            heading: None,
        }
    }

    #[test]
    fn accepts_well_formed_forest() {
        check(&[MarkdownNode::new("a", 0).with_heading(3).with_children(vec![
            MarkdownNode::new("b", 1),
        ])]);
    }

    #[test]
    #[should_panic(expected = "at level 3 under parent")]
    fn rejects_level_gap() {
        check(&[MarkdownNode::new("a", 0).with_children(vec![MarkdownNode::new("b", 3)])]);
    }

    #[test]
    #[should_panic(expected = "not at level 0")]
    fn rejects_nested_root() {
        check(&[MarkdownNode::new("a", 1)]);
    }

    #[test]
    fn accepts_wired_batch() {
        check_batch(&[action("x", "page"), action("y", "x"), action("z", "page")], "page");
    }

    #[test]
    #[should_panic(expected = "before it was created")]
    fn rejects_forward_reference() {
        check_batch(&[action("y", "x"), action("x", "page")], "page");
    }

    #[test]
    #[should_panic(expected = "duplicate uid")]
    fn rejects_duplicate_uid() {
        check_batch(&[action("x", "page"), action("x", "page")], "page");
    }
}
