use crate::search_tree::node::Node;

/// A policy applied to every node on the path from a structural change back up to the root.
///
/// The recursive insertion and removal in `tree` hand each subtree root to `rebalance` on the way
/// back up and link whatever it returns into the parent, so a policy may replace the subtree root.
/// The returned subtree must hold the same values in the same in-order sequence.
pub trait Balance {
    fn rebalance<T>(&self, node: Box<Node<T>>) -> Box<Node<T>>;
}

/// A policy that never restructures the tree. The shape is a pure consequence of insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn rebalance<T>(&self, node: Box<Node<T>>) -> Box<Node<T>> {
        node
    }
}

/// A policy that keeps the heights of the two child subtrees of every node within one of each
/// other.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Balance for Avl {
    fn rebalance<T>(&self, mut node: Box<Node<T>>) -> Box<Node<T>> {
        let balance_factor = node.balance_factor();

        if balance_factor > 1 {
            if let Some(child) = node.right.take() {
                if child.balance_factor() < 0 {
                    node.right = Some(rotate_right(child));
                } else {
                    node.right = Some(child);
                }
            }
            rotate_left(node)
        } else if balance_factor < -1 {
            if let Some(child) = node.left.take() {
                if child.balance_factor() > 0 {
                    node.left = Some(rotate_left(child));
                } else {
                    node.left = Some(child);
                }
            }
            rotate_right(node)
        } else {
            node
        }
    }
}

// precondition: node has a right child
pub fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating left");
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

// precondition: node has a left child
pub fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating right");
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}
