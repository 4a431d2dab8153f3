//! Ordered n-ary tree used to hold a document's heading hierarchy.
//!
//! The tree owns every subtree; nodes never point back at their parent.
//! Rendering lives in [`format`], driven by a content closure and a
//! [`RenderOptions`] value.

pub mod format;

use std::fmt;

pub use format::RenderOptions;

/// A node with a payload and its ordered child subtrees
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    pub data: T,
    pub branches: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Create a leaf node
    pub fn new(data: T) -> Self {
        Self {
            data,
            branches: Vec::new(),
        }
    }

    /// Create a node with the given children
    pub fn with_branches(data: T, branches: Vec<Tree<T>>) -> Self {
        Self { data, branches }
    }

    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.branches.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order walk over the payloads, starting with this node
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Tree::iter`]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.branches.iter().rev());
        Some(&node.data)
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.format_as_string(&RenderOptions::default(), |data| data.to_string());
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<&'static str> {
        Tree::with_branches(
            "root",
            vec![
                Tree::with_branches("a", vec![Tree::new("a1"), Tree::new("a2")]),
                Tree::new("b"),
            ],
        )
    }

    #[test]
    fn test_preorder_visits_children_in_order() {
        let tree = sample();
        let visited: Vec<_> = tree.iter().copied().collect();
        assert_eq!(visited, vec!["root", "a", "a1", "a2", "b"]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_display_uses_ascii_outline() {
        let expected = "\
+- root
   +- a
   |  +- a1
   |  +- a2
   +- b
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_leaf() {
        assert!(Tree::new(1).is_leaf());
        assert!(!sample().is_leaf());
    }
}
