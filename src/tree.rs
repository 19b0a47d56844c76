//! An integer-keyed, unbalanced BST. The tree owns its nodes through plain
//! `Option<Box<...>>` links, so mutation recurses on the *incoming link* of
//! each node rather than keeping parent pointers (which would create
//! ownership cycles).
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(1), Some(&2));
//! assert_eq!(tree.len(), 1);
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(1), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! let deleted_value = tree.delete(1);
//!
//! assert_eq!(deleted_value, Some(3));
//! assert_eq!(tree.find(1), None);
//! ```

use std::cmp::Ordering;
use std::mem;

type Link<V> = Option<Box<Node<V>>>;

#[derive(Clone, Debug)]
struct Node<V> {
    key: i64,
    value: V,
    left: Link<V>,
    right: Link<V>,
}

/// An unbalanced Binary Search Tree keyed by `i64`. This can be used for
/// inserting, finding, and deleting keys and values.
///
/// The stored values are opaque to the tree: they are moved in on
/// [`insert`][Tree::insert], handed back out on lookup or deletion, and never
/// inspected or copied in between.
///
/// Because the tree never rebalances, every operation is `O(height)` and the
/// height depends on insertion order - sorted keys degenerate into a chain.
#[derive(Clone, Debug)]
pub struct Tree<V> {
    root: Link<V>,
    len: usize,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Tree<V> {
    fn drop(&mut self) {
        // `clear` frees without recursing so a degenerate chain can't blow
        // the stack the way the derived recursive drop would.
        self.clear();
    }
}

impl<V> Tree<V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(1), Some(&2));
    /// assert_eq!(tree.find(42), None);
    /// ```
    pub fn find(&self, key: i64) -> Option<&V> {
        self.root.as_ref().and_then(|n| n.find(key))
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key overwrites the value in
    /// place and returns the previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.find(1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.find(1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        let old = insert_at(&mut self.root, key, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Deletes the node containing the given key from the tree and returns
    /// its value. If the tree does not contain a node with the key, nothing
    /// happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(1), Some(2));
    /// assert_eq!(tree.delete(1), None);
    /// assert_eq!(tree.find(1), None);
    /// ```
    pub fn delete(&mut self, key: i64) -> Option<V> {
        let removed = delete_at(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// The number of nodes currently in the tree. This is a maintained
    /// counter, not a traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(1, 2);
    /// tree.insert(2, 3);
    /// assert_eq!(tree.len(), 2);
    ///
    /// tree.delete(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every node in the tree, leaving it empty. The walk is
    /// iterative: each node's children are detached onto a worklist before
    /// the node itself is freed, so chain-shaped trees of any depth are fine.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    /// tree.insert(2, 3);
    ///
    /// tree.clear();
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.find(1), None);
    /// ```
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The keys of the tree in ascending order, for asserting the BST
    /// invariant in tests.
    #[cfg(test)]
    fn keys_in_order(&self) -> Vec<i64> {
        fn walk<V>(link: &Link<V>, out: &mut Vec<i64>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.key);
                walk(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }
}

impl<V> Node<V> {
    fn new(key: i64, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    fn find(&self, key: i64) -> Option<&V> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref().and_then(|n| n.find(key)),
        }
    }
}

/// Inserts into the subtree hanging off `link`, returning the previous value
/// if the key was already present.
///
/// Recursion descends by passing the child *link* itself, so when the key is
/// new the node is written through the live parent-to-child edge rather than
/// a local copy of it.
fn insert_at<V>(link: &mut Link<V>, key: i64, value: V) -> Option<V> {
    match link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_at(&mut node.left, key, value),
            Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            Ordering::Greater => insert_at(&mut node.right, key, value),
        },
    }
}

/// Deletes `key` from the subtree hanging off `link`, returning the removed
/// value if the key was present.
///
/// The incoming link doubles as the parent edge: whichever case applies, the
/// removal rewrites `link` in place and never needs a stored back-pointer.
fn delete_at<V>(link: &mut Link<V>, key: i64) -> Option<V> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => delete_at(&mut node.left, key),
        Ordering::Greater => delete_at(&mut node.right, key),
        // A missing left child covers both the leaf case and the
        // right-child-only case: the right link (possibly `None`) is spliced
        // into the slot the node occupied.
        Ordering::Equal if node.left.is_none() => {
            let removed = link.take()?;
            *link = removed.right;
            Some(removed.value)
        }
        Ordering::Equal if node.right.is_none() => {
            let removed = link.take()?;
            *link = removed.left;
            Some(removed.value)
        }
        // Two children: promote the in-order successor. The successor is
        // detached from its original slot first (a 0-or-1-child removal,
        // since the left-most node has no left child), then its key and
        // value overwrite this node in place. The node's allocation and its
        // links to the untouched subtrees survive; only the contents change.
        Ordering::Equal => {
            let successor = pop_leftmost(&mut node.right);
            node.key = successor.key;
            Some(mem::replace(&mut node.value, successor.value))
        }
    }
}

/// Detaches and returns the left-most node of the subtree hanging off
/// `link`, splicing that node's right child (possibly `None`) into its slot.
///
/// ## Panics
///
/// When called on an empty link. `delete_at` only calls this with the right
/// subtree of a node that has two children.
fn pop_leftmost<V>(link: &mut Link<V>) -> Box<Node<V>> {
    let node = link
        .as_deref_mut()
        .expect("A two-child node always has a right subtree");
    if node.left.is_some() {
        pop_leftmost(&mut node.left)
    } else {
        let mut removed = link.take().expect("The link was just matched non-empty");
        *link = removed.right.take();
        removed
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::HashMap;

    use super::*;
    use crate::test::quick::TreeOp;

    /// Applies a set of operations to a tree and a hashmap.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of keys in the map.
    fn do_ops<V>(ops: &[TreeOp<V>], bst: &mut Tree<V>, map: &mut HashMap<i64, V>)
    where
        V: std::fmt::Debug + PartialEq + Clone,
    {
        for op in ops {
            match op {
                TreeOp::Insert(k, v) => {
                    assert_eq!(bst.insert(*k, v.clone()), map.insert(*k, v.clone()));
                }
                TreeOp::Remove(k) => {
                    assert_eq!(bst.delete(*k), map.remove(k));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<TreeOp<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut map = HashMap::new();

            do_ops(&ops, &mut tree, &mut map);
            tree.len() == map.len() && map.keys().all(|key| tree.find(*key) == map.get(key))
        }
    }

    quickcheck::quickcheck! {
        fn keys_stay_strictly_sorted(ops: Vec<TreeOp<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut map = HashMap::new();

            do_ops(&ops, &mut tree, &mut map);
            tree.keys_in_order().windows(2).all(|pair| pair[0] < pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(i64::from(*x), *x);
            }

            xs.iter().all(|x| tree.find(i64::from(*x)) == Some(x))
        }
    }
}
