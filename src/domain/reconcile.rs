//! Suppression reconciliation
//!
//! Turns one group's classified levels into a nested tree whose leaf sums
//! reconcile exactly with the declared parent totals. Wherever disclosed
//! finer-grained rows undercount a coarser total, the gap is covered by a
//! synthetic "suppressed" leaf, so the sunburst's areas stay consistent with
//! the reported figures.

use tracing::debug;

use crate::domain::codes::CodeRow;
use crate::domain::levels::{GroupLevels, LabeledValue};
use crate::domain::tree::TreeNode;

/// Build the reconciled tree for one top-level group.
///
/// `lead` names the node when the response carried no parent row. Returns
/// `None` when neither a parent value nor any disclosed children exist, in
/// which case the group contributes nothing to the chart.
///
/// Policy for a suppressed parent value: the group's size is the sum of its
/// children and no suppressed-remainder sibling is synthesized, since there
/// is no anchor total to reconcile against.
pub fn reconcile_group(levels: &GroupLevels, lead: &CodeRow) -> Option<TreeNode> {
    let mut children: Vec<TreeNode> = levels
        .children
        .iter()
        .map(|child| reconcile_child(child, &levels.grandchildren))
        .collect();

    // suppressed sibling covering children the parent total says must exist
    let parent_size = levels.parent.as_ref().and_then(|p| p.value);
    if let Some(size) = parent_size {
        let children_total: u64 = children.iter().map(TreeNode::total).sum();
        if children_total < size {
            debug!(
                group = %lead.code,
                remainder = size - children_total,
                "synthesizing suppressed child"
            );
            children.push(TreeNode::suppressed(size - children_total));
        }
    }

    let (name, label) = match &levels.parent {
        Some(parent) => (parent.code.clone(), parent.label.clone()),
        None => (lead.code.clone(), lead.label.clone()),
    };

    // either/or normalization: a node keeps its size only while it has no
    // children to represent it
    if children.is_empty() {
        parent_size.map(|size| TreeNode::leaf(name, label, size))
    } else {
        Some(TreeNode::internal(name, label, children))
    }
}

/// Attach matching grandchildren under one child and cover any gap with a
/// suppressed leaf.
fn reconcile_child(child: &LabeledValue, grandchildren: &[LabeledValue]) -> TreeNode {
    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut grandchild_total: u64 = 0;

    // a grandchild belongs to the child whose code it extends by one digit
    for grandchild in grandchildren {
        if grandchild.code.len() == child.code.len() + 1 && grandchild.code.starts_with(&child.code)
        {
            grandchild_total += grandchild.value.unwrap_or(0);
            nodes.push(TreeNode::leaf(
                grandchild.code.clone(),
                grandchild.label.clone(),
                grandchild.value.unwrap_or(0),
            ));
        }
    }

    match child.value {
        Some(size) => {
            if grandchild_total < size {
                nodes.push(TreeNode::suppressed(size - grandchild_total));
            }
            if nodes.is_empty() {
                // only reachable when size == 0 and nothing was disclosed
                TreeNode::leaf(child.code.clone(), child.label.clone(), size)
            } else {
                TreeNode::internal(child.code.clone(), child.label.clone(), nodes)
            }
        }
        // child total unknown: keep what was disclosed, synthesize nothing
        None => TreeNode::internal(child.code.clone(), child.label.clone(), nodes),
    }
}
