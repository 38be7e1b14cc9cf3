use crate::search_tree::balance::{Avl, Balance, Unbalanced};
use crate::search_tree::node::Node;
use crate::search_tree::tree::{self, Comparator, Link};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

/// An ordered collection of values arranged as a binary search tree by a caller-supplied
/// comparator.
///
/// The tree never holds two values that its comparator deems equal. The balance policy `B` decides
/// whether the tree is restructured after insertions and removals: `Unbalanced` keeps the shape
/// produced by insertion order, while `Avl` keeps the heights of the two child subtrees of every
/// node within one of each other.
///
/// # Examples
///
/// ```
/// use search_trees::search_tree::AvlTree;
///
/// let mut tree = AvlTree::new(|a: &u32, b: &u32| a.cmp(b));
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
///
/// assert_eq!(tree.count(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.get(&2), Some(&2));
///
/// assert_eq!(tree.remove(&1), Some(1));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct SearchTree<T, B = Unbalanced> {
    root: Link<T>,
    compare: Box<Comparator<T>>,
    policy: B,
}

/// A search tree whose shape is a pure consequence of insertion order.
pub type BinaryTree<T> = SearchTree<T, Unbalanced>;

/// A self-balancing search tree where the heights of the two child subtrees of any node differ by
/// at most one.
pub type AvlTree<T> = SearchTree<T, Avl>;

impl<T, B> SearchTree<T, B>
where
    B: Balance + Default,
{
    /// Constructs a new, empty tree ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let tree = BinaryTree::new(|a: &u32, b: &u32| b.cmp(a));
    /// assert!(tree.is_empty());
    /// ```
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_policy(compare, B::default())
    }
}

impl<T, B> SearchTree<T, B>
where
    B: Balance,
{
    /// Constructs a new, empty tree ordered by `compare` and restructured by `policy`.
    pub fn with_policy<F>(compare: F, policy: B) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        SearchTree {
            root: None,
            compare: Box::new(compare),
            policy,
        }
    }

    /// Inserts a value into the tree. Returns `false` and drops `value` if the tree already holds
    /// a value that compares equal to it; the stored value is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let SearchTree {
            ref mut root,
            ref compare,
            ref policy,
        } = self;
        let (new_root, inserted) = tree::insert(root.take(), value, &**compare, policy);
        *root = new_root;
        inserted
    }

    /// Removes the value that compares equal to `value` and returns it. Returns `None` if no such
    /// value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let SearchTree {
            ref mut root,
            ref compare,
            ref policy,
        } = self;
        let (new_root, removed) = tree::remove(root.take(), value, &**compare, policy);
        *root = new_root;
        removed
    }

    /// Returns the stored value that compares equal to `value` under the tree's own comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a'));
    /// assert_eq!(tree.get(&(1, ' ')), Some(&(1, 'a')));
    /// assert_eq!(tree.get(&(2, ' ')), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.root, value, &*self.compare)
    }

    /// Returns the first stored value that compares equal to `value` under `compare`, which may
    /// order values differently from the tree's own comparator. Every node is visited, so this
    /// takes linear time.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a'));
    /// tree.insert((2, 'b'));
    /// assert_eq!(tree.get_by(&(0, 'b'), |a, b| a.1.cmp(&b.1)), Some(&(2, 'b')));
    /// ```
    pub fn get_by<F>(&self, value: &T, compare: F) -> Option<&T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        tree::get_by(&self.root, value, compare)
    }

    /// Checks if the tree holds a value that compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the height of the tree. A tree with only a root has height 0 and an empty tree has
    /// height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns the root node of the tree, from which its shape can be inspected.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the number of values in the tree by visiting every node.
    pub fn count(&self) -> usize {
        tree::count(&self.root)
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SearchTreeIter<T> {
        SearchTreeIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T, B> SearchTree<T, B>
where
    T: Display,
    B: Balance,
{
    /// Returns the values in breadth-first order, separated by `" \n "` and enclosed in brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// assert_eq!(tree.level_order(), "[]");
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.level_order(), "[2 \n 1 \n 3]");
    /// ```
    pub fn level_order(&self) -> String {
        tree::level_order(&self.root)
    }

    /// Returns the values in ascending order, one per line and enclosed in brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::search_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new(|a: &u32, b: &u32| a.cmp(b));
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.in_order(), "[1 \n 2]");
    /// ```
    pub fn in_order(&self) -> String {
        tree::in_order(&self.root)
    }
}

impl<T, B> Default for SearchTree<T, B>
where
    T: Ord + 'static,
    B: Balance + Default,
{
    fn default() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl<T, B> Extend<T> for SearchTree<T, B>
where
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B> Debug for SearchTree<T, B>
where
    T: Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B> Drop for SearchTree<T, B> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<T, B> IntoIterator for SearchTree<T, B> {
    type IntoIter = SearchTreeIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T, B> IntoIterator for &'a SearchTree<T, B>
where
    T: 'a,
    B: Balance,
{
    type IntoIter = SearchTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SearchTree<T, B>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct SearchTreeIntoIter<T> {
    current: Link<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SearchTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Drop for SearchTreeIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `SearchTree<T, B>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct SearchTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a Link<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SearchTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AvlTree, BinaryTree, SearchTree};
    use crate::search_tree::Avl;

    fn natural(a: &u32, b: &u32) -> std::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_empty() {
        let tree = BinaryTree::new(natural);
        assert!(tree.is_empty());
        assert_eq!(tree.count(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.level_order(), "[]");
        assert_eq!(tree.in_order(), "[]");
    }

    #[test]
    fn test_insert() {
        let mut tree = BinaryTree::new(natural);
        assert!(tree.insert(1));
        assert!(tree.contains(&1));
        assert_eq!(tree.get(&1), Some(&1));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_insert_duplicate_keeps_stored_value() {
        let mut tree = AvlTree::new(|a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0));
        assert!(tree.insert((1, 1)));
        assert!(!tree.insert((1, 2)));
        assert_eq!(tree.get(&(1, 0)), Some(&(1, 1)));
        assert_eq!(tree.count(), 1);
    }

    #[test]
    fn test_remove_round_trip() {
        let mut tree = AvlTree::new(natural);
        tree.insert(7);
        assert_eq!(tree.remove(&7), Some(7));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_min_max() {
        let mut tree = BinaryTree::new(natural);
        tree.extend(vec![3, 1, 5]);

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_reverse_comparator() {
        let mut tree = BinaryTree::new(|a: &u32, b: &u32| b.cmp(a));
        tree.extend(vec![1, 3, 2]);

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
        assert_eq!(tree.in_order(), "[3 \n 2 \n 1]");
    }

    #[test]
    fn test_with_policy() {
        let mut tree = SearchTree::with_policy(natural, Avl);
        tree.extend(1..=3);
        assert_eq!(tree.level_order(), "[2 \n 1 \n 3]");
    }

    #[test]
    fn test_default() {
        let mut tree: AvlTree<u32> = AvlTree::default();
        tree.extend(vec![2, 1]);
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }

    #[test]
    fn test_clear() {
        let mut tree = BinaryTree::new(natural);
        tree.extend(vec![1, 2]);
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_into_iter() {
        let mut tree = AvlTree::new(natural);
        tree.extend(vec![1, 5, 3]);

        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_partial_into_iter() {
        let mut tree = BinaryTree::new(natural);
        tree.extend(0..100);

        let mut iterator = tree.into_iter();
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.next(), Some(1));
    }

    #[test]
    fn test_iter() {
        let mut tree = BinaryTree::new(natural);
        tree.extend(vec![1, 5, 3]);

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&tree).into_iter().count(), 3);
    }

    #[test]
    fn test_drop_degenerate() {
        let mut tree = BinaryTree::new(natural);
        tree.extend(0..2_000);
        assert_eq!(tree.height(), 1_999);
    }
}
