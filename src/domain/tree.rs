//! Output tree in d3-hierarchy shape
//!
//! A node carries either a leaf `size` or a non-empty `children` vector,
//! never both. The serialized form is consumed directly by
//! `d3.hierarchy(json).sum(d => d.size)` in the sunburst renderer.

use serde::{Deserialize, Serialize};
use termtree::Tree;

/// Name of the fixed synthetic root node.
pub const ROOT_NAME: &str = "naics";

/// Name and label of synthetic placeholder nodes covering non-disclosed
/// remainders.
pub const SUPPRESSED: &str = "suppressed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// NAICS code (or "naics" / "suppressed" for synthetic nodes)
    pub name: String,
    /// Human-readable industry label
    pub label: String,
    /// Leaf value; absent on internal nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Child nodes; absent on leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, label: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            size: Some(size),
            children: Vec::new(),
        }
    }

    pub fn internal(
        name: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            size: None,
            children,
        }
    }

    /// Synthetic placeholder covering a non-disclosed remainder.
    pub fn suppressed(size: u64) -> Self {
        Self::leaf(SUPPRESSED, SUPPRESSED, size)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of all leaf sizes under this node. For a reconciled node this
    /// equals the declared pre-reconciliation total; the renderer divides by
    /// the root's total for hover percentages.
    pub fn total(&self) -> u64 {
        if self.is_leaf() {
            self.size.unwrap_or(0)
        } else {
            self.children.iter().map(TreeNode::total).sum()
        }
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of leaves under this node (counting the node itself if a leaf).
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }
}

/// Build the fixed root over the per-group trees.
pub fn root(children: Vec<TreeNode>) -> TreeNode {
    TreeNode::internal(ROOT_NAME, ROOT_NAME, children)
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        let text = match self.size {
            Some(size) => format!("{} {} ({})", self.name, self.label, size),
            None => format!("{} {} [{}]", self.name, self.label, self.total()),
        };

        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();

        Tree::new(text).with_leaves(leaves)
    }
}
