//! Binary search trees ordered by a caller-supplied comparator.
//!
//! Insertion and removal share one recursive skeleton that hands every subtree root on the
//! affected path to a balance policy on the way back up. `Unbalanced` leaves the shape alone and
//! `Avl` rotates so that the heights of the two child subtrees of any node differ by at most one.

mod balance;
mod node;
mod ordered;
mod tree;

pub use self::balance::{Avl, Balance, Unbalanced};
pub use self::node::Node;
pub use self::ordered::{AvlTree, BinaryTree, SearchTree, SearchTreeIntoIter, SearchTreeIter};
pub use self::tree::{Comparator, Link};
