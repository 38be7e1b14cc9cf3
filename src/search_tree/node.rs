use crate::search_tree::tree::{self, Link};

/// A struct representing an internal node of a search tree.
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    /// Height of the subtree rooted at this node. A leaf has height 0.
    pub fn height(&self) -> i32 {
        1 + tree::height(&self.left).max(tree::height(&self.right))
    }

    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.right) - tree::height(&self.left)
    }
}
