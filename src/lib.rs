//! This crate exposes two small owned containers: an integer-keyed
//! [Binary Search Tree][tree::Tree] and a singly linked [FIFO
//! queue][queue::Queue].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, an
//! associated value, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants mean searching for a key takes `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`).
//! The tree here does **not** rebalance itself, so its height depends
//! entirely on insertion order: shuffled keys give a height around
//! `O(lg N)` while sorted keys degenerate into an `N`-deep chain.
//!
//! ## Queue
//!
//! The queue is a chain of singly linked elements with head and tail
//! pointers, giving `O(1)` appends at the tail and `O(1)` removals at the
//! head. Elements come back out in exactly the order they went in.
//!
//! Both containers treat their stored values as opaque: they are moved in,
//! handed back out, and never inspected, compared, or copied in between.
//! Neither container is synchronized - a caller that needs concurrent
//! access wraps the whole structure in a lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod queue;
pub mod tree;
