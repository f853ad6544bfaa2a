//! This crate exposes a mutable, unbalanced Binary Search Tree (BST) along with
//! cursors that walk it in order or in pre-order.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element and
//! has two child subtrees, either of which may be empty. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)`. This tree never rebalances
//! itself, so its height depends entirely on the order elements were
//! inserted in: random input gives `O(lg N)` height while sorted input
//! gives a chain of height `N - 1`.
//!
//! ## Traversal
//!
//! [`BSTree::iter`] and [`BSTree::pre_order_iter`] borrow the tree, so the
//! compiler keeps it from changing while they are alive. The
//! [`cursor`]s don't borrow the tree and instead fail fast with
//! [`TreeError::ConcurrentModification`] when the tree changed since they
//! were created.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cursor;
mod error;
pub mod iter;
mod node;
mod tree;

pub use cursor::{InOrderCursor, PreOrderCursor};
pub use error::TreeError;
pub use tree::BSTree;
