//! Arena-backed constituency tree.
//!
//! ```text
//! (ROOT (S (NP (NNP Maria)) (VP (VBD said) (SBAR (S (NP (PRP she)) (VP (VBD won)))))))
//! ```
//!
//! Nodes are stored in pre-order, so iterating [`ParseTree::nodes`] visits
//! every constituent before its children.

mod bracketed;
mod head_rules;

use std::fmt;

use crate::syntax::{basic_category, Constituents};
use crate::CorefResult;

/// Handle to a node of a [`ParseTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Pre-order position of the node.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed sentence.
#[derive(Debug, Clone)]
pub struct ParseTree {
    nodes: Vec<TreeNode>,
}

impl ParseTree {
    /// Reads a tree in Penn Treebank bracketed notation.
    ///
    /// An unlabelled outermost bracket, as found in treebank files, becomes a
    /// `ROOT` node.
    pub fn from_bracketed(text: &str) -> CorefResult<Self> {
        bracketed::read(text)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Words under `node` joined by single spaces.
    pub fn yield_text(&self, node: NodeId) -> String {
        self.leaves(node)
            .into_iter()
            .map(|leaf| self.label(leaf))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Outermost constituent of the given category whose words are exactly
    /// `text`.
    pub fn find(&self, category: &str, text: &str) -> Option<NodeId> {
        self.nodes().find(|&node| {
            !self.is_leaf(node)
                && basic_category(self.label(node)) == category
                && self.yield_text(node) == text
        })
    }

    fn push(&mut self, label: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            label: label.to_string(),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = &self.nodes[id.0];
        if node.children.is_empty() {
            return f.write_str(&node.label);
        }
        write!(f, "({}", node.label)?;
        for &child in &node.children {
            f.write_str(" ")?;
            self.write_node(f, child)?;
        }
        f.write_str(")")
    }
}

impl Constituents for ParseTree {
    type Node = NodeId;

    fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.0].label
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn head_child(&self, node: NodeId) -> Option<NodeId> {
        head_rules::head_child(self, node)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root())
    }
}
