//! The interface this crate needs from a syntactic parse.
//!
//! Parsing itself happens upstream. Any parser integration can feed the
//! agreement engine by implementing [`Constituents`] over its own tree type;
//! [`crate::ParseTree`] is the bundled implementation.

use std::fmt::Debug;

/// Read-only access to a constituency parse.
///
/// Leaves are word tokens (their label is the word), pre-terminals are the
/// part-of-speech nodes directly above them, and every other node is a
/// phrasal constituent.
pub trait Constituents {
    /// Handle to a node of the tree.
    type Node: Copy + Eq + Debug;

    /// Category label for internal nodes, the word itself for leaves.
    fn label(&self, node: Self::Node) -> &str;

    /// Children in left-to-right order.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The child that heads `node`, or `None` for leaves.
    fn head_child(&self, node: Self::Node) -> Option<Self::Node>;

    fn is_leaf(&self, node: Self::Node) -> bool {
        self.children(node).is_empty()
    }

    fn is_preterminal(&self, node: Self::Node) -> bool {
        matches!(self.children(node), [only] if self.is_leaf(*only))
    }

    /// True if `node` lies strictly inside `ancestor`. A node does not
    /// dominate itself.
    fn dominates(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut current = self.parent(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Follows head children down to the pre-terminal carrying the lexical
    /// head of `node`.
    fn head_preterminal(&self, node: Self::Node) -> Option<Self::Node> {
        let mut current = node;
        loop {
            if self.is_preterminal(current) {
                return Some(current);
            }
            if self.is_leaf(current) {
                return None;
            }
            current = self.head_child(current)?;
        }
    }

    /// Leaves under `node`, left to right.
    fn leaves(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            let children = self.children(n);
            if children.is_empty() {
                leaves.push(n);
            } else {
                stack.extend(children.iter().rev().copied());
            }
        }
        leaves
    }
}

/// Strips function tags and co-indexation from a category label.
///
/// `NP-SBJ-1` and `NP=2` both become `NP`. Labels that start with a dash,
/// such as `-LRB-` or `-NONE-`, are returned unchanged.
pub fn basic_category(label: &str) -> &str {
    if label.starts_with('-') {
        return label;
    }
    match label.find(|c| c == '-' || c == '=') {
        Some(idx) => &label[..idx],
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_function_tags() {
        assert_eq!(basic_category("NP-SBJ-1"), "NP");
        assert_eq!(basic_category("NP=2"), "NP");
        assert_eq!(basic_category("PRP$"), "PRP$");
        assert_eq!(basic_category("-LRB-"), "-LRB-");
        assert_eq!(basic_category("-NONE-"), "-NONE-");
    }
}
