use crate::search_tree::balance::Balance;
use crate::search_tree::node::Node;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::Display;
use std::mem;

pub type Link<T> = Option<Box<Node<T>>>;

/// A three-way comparison called as `compare(candidate, stored)`.
pub type Comparator<T> = dyn Fn(&T, &T) -> Ordering;

const DELIMITER: &str = " \n ";

pub fn height<T>(link: &Link<T>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height(),
    }
}

pub fn count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// Inserts `value` below `link` and returns the new subtree root along with whether a node was
/// added. Values that compare equal to a stored value are dropped.
pub fn insert<T, B>(link: Link<T>, value: T, compare: &Comparator<T>, policy: &B) -> (Link<T>, bool)
where
    B: Balance,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Some(Box::new(Node::new(value))), true),
    };

    let inserted = match compare(&value, &node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value, compare, policy);
            node.left = left;
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value, compare, policy);
            node.right = right;
            inserted
        },
        Ordering::Equal => {
            debug!("ignoring duplicate value");
            false
        },
    };

    if inserted {
        (Some(policy.rebalance(node)), inserted)
    } else {
        (Some(node), inserted)
    }
}

// precondition: node is the root of a non-empty subtree
fn remove_min<T, B>(mut node: Box<Node<T>>, policy: &B) -> (Link<T>, T)
where
    B: Balance,
{
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left, policy);
            node.left = left;
            (Some(policy.rebalance(node)), min)
        },
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        },
    }
}

/// Removes the stored value equal to `value` below `link` and returns the new subtree root along
/// with the removed value.
pub fn remove<T, B>(
    link: Link<T>,
    value: &T,
    compare: &Comparator<T>,
    policy: &B,
) -> (Link<T>, Option<T>)
where
    B: Balance,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match compare(value, &node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value, compare, policy);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value, compare, policy);
            node.right = right;
            removed
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.value)),
            (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.value)),
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right, policy);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.value, successor))
            },
        },
    };

    if removed.is_some() {
        (Some(policy.rebalance(node)), removed)
    } else {
        (Some(node), removed)
    }
}

pub fn get<'a, T>(link: &'a Link<T>, value: &T, compare: &Comparator<T>) -> Option<&'a T> {
    let mut curr = link;
    while let Some(node) = curr {
        match compare(value, &node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.value),
        }
    }
    None
}

/// Scans every node in pre-order since the shape of the tree says nothing about an ordering other
/// than the one it was built with.
pub fn get_by<'a, T, F>(link: &'a Link<T>, value: &T, compare: F) -> Option<&'a T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut stack: Vec<&'a Node<T>> = Vec::new();
    if let Some(node) = link {
        stack.push(node);
    }

    while let Some(node) = stack.pop() {
        if compare(value, &node.value) == Ordering::Equal {
            return Some(&node.value);
        }
        if let Some(ref right) = node.right {
            stack.push(right);
        }
        if let Some(ref left) = node.left {
            stack.push(left);
        }
    }
    None
}

pub fn min<T>(link: &Link<T>) -> Option<&T> {
    link.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(link: &Link<T>) -> Option<&T> {
    link.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn level_order<T>(link: &Link<T>) -> String
where
    T: Display,
{
    let mut values = Vec::new();
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(node) = link {
        queue.push_back(node);
    }

    while let Some(node) = queue.pop_front() {
        values.push(node.value.to_string());
        if let Some(ref left) = node.left {
            queue.push_back(left);
        }
        if let Some(ref right) = node.right {
            queue.push_back(right);
        }
    }

    format!("[{}]", values.join(DELIMITER))
}

pub fn in_order<T>(link: &Link<T>) -> String
where
    T: Display,
{
    let mut values = Vec::new();
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut curr = link;

    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = &node.left;
        }
        match stack.pop() {
            Some(node) => {
                values.push(node.value.to_string());
                curr = &node.right;
            },
            None => break,
        }
    }

    format!("[{}]", values.join(DELIMITER))
}

/// Releases every node below `link` without recursing, so degenerate trees can be dropped.
pub fn clear<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
