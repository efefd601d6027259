use super::{order::BlockOrder, record::BlockAction, uid::UidSource};
use crate::parsing::blocks::MarkdownNode;

/// Flattens a forest into `create-block` actions in depth-first pre-order.
///
/// `order` applies to the roots only; every descendant is appended with
/// [`BlockOrder::Last`] so siblings keep document order.
pub fn linearize(
    roots: &[MarkdownNode],
    parent_uid: &str,
    order: BlockOrder,
    uids: &mut dyn UidSource,
) -> Vec<BlockAction> {
    let total = roots.iter().map(MarkdownNode::subtree_len).sum();
    let mut out = Vec::with_capacity(total);

    // Pending (node, parent uid, order), pushed in reverse so the next
    // sibling in document order is always on top.
    let mut stack: Vec<(&MarkdownNode, String, BlockOrder)> = roots
        .iter()
        .rev()
        .map(|root| (root, parent_uid.to_string(), order))
        .collect();

    while let Some((node, parent_uid, order)) = stack.pop() {
        let uid = uids.next_uid();
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, uid.clone(), BlockOrder::Last)),
        );
        out.push(BlockAction {
            uid,
            parent_uid,
            order,
            text: node.content.clone(),
            heading: node.heading,
        });
    }
    out
}
