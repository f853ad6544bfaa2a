//! Cursors walk a tree without borrowing it.
//!
//! A cursor remembers which nodes it still has to visit along with a stamp identifying the
//! tree it was created from. Every call to `next` takes the tree again and first compares
//! stamps: once the tree has been changed by an insert or a remove, every cursor created
//! before the change fails with [`TreeError::ConcurrentModification`] instead of walking nodes
//! that may have moved. Cursors created after the change are unaffected, and any number of
//! cursors created between two changes are valid at the same time.
//!
//! # Examples
//!
//! ```
//! use bstree::{BSTree, TreeError};
//!
//! let mut tree: BSTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! let mut cursor = tree.pre_order_cursor();
//! let mut seen = Vec::new();
//! while cursor.has_next() {
//!     seen.push(*cursor.next(&tree)?);
//! }
//! assert_eq!(seen, vec![5, 3, 1, 4, 8]);
//! assert_eq!(cursor.next(&tree), Err(TreeError::Exhausted));
//!
//! let mut cursor = tree.in_order_cursor();
//! assert_eq!(cursor.next(&tree), Ok(&1));
//! tree.remove(&8)?;
//! assert_eq!(cursor.next(&tree), Err(TreeError::ConcurrentModification));
//! # Ok::<(), TreeError>(())
//! ```

use std::marker::PhantomData;

use generational_arena::Index;
use tracing::debug;

use crate::error::TreeError;
use crate::iter::push_children;
use crate::node::{Node, Subtree};
use crate::tree::{BSTree, Stamp};

/// What both kinds of cursor track besides their stack.
#[derive(Clone, Debug)]
struct Guard {
    stamp: Stamp,
    next_called: bool,
}

impl Guard {
    fn new<T>(tree: &BSTree<T>) -> Self {
        Self {
            stamp: tree.stamp(),
            next_called: false,
        }
    }

    /// Fails if `tree` isn't the tree, or no longer the version of the tree, this cursor was
    /// created from.
    fn check<T>(&self, tree: &BSTree<T>) -> Result<(), TreeError> {
        let current = tree.stamp();
        if current != self.stamp {
            debug!(
                created = ?self.stamp,
                current = ?current,
                "cursor used after the tree was modified"
            );
            return Err(TreeError::ConcurrentModification);
        }
        Ok(())
    }

    /// Pops the next node to visit and marks this cursor as having yielded something.
    fn pop<'t, T>(
        &mut self,
        tree: &'t BSTree<T>,
        stack: &mut Vec<Index>,
    ) -> Result<&'t Node<T>, TreeError> {
        self.check(tree)?;
        let id = stack.pop().ok_or(TreeError::Exhausted)?;
        let node = tree
            .nodes()
            .get(id)
            .ok_or(TreeError::ConcurrentModification)?;
        self.next_called = true;
        Ok(node)
    }

    /// Removes the element at the root of `tree`, not the element this cursor last yielded.
    fn remove<T>(&self, tree: &mut BSTree<T>) -> Result<T, TreeError> {
        if !self.next_called || tree.is_empty() {
            return Err(TreeError::IllegalState);
        }
        tree.remove_root()
    }
}

/// A cursor over the elements of a tree in ascending order.
///
/// Created by [`BSTree::in_order_cursor`].
#[derive(Clone, Debug)]
pub struct InOrderCursor<T> {
    /// Ancestors whose element hasn't been yielded yet. The top is the next element.
    stack: Vec<Index>,
    guard: Guard,
    _element: PhantomData<fn(&T)>,
}

impl<T> InOrderCursor<T> {
    pub(crate) fn new(tree: &BSTree<T>) -> Self {
        let mut stack = Vec::new();
        tree.nodes().push_left_spine(tree.root(), &mut stack);
        Self {
            stack,
            guard: Guard::new(tree),
            _element: PhantomData,
        }
    }

    /// Returns whether there are elements left to visit. This never fails, even if the tree
    /// has since been modified.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Yields the next element in ascending order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::ConcurrentModification`] if `tree` was modified since this cursor was
    ///   created, or isn't the tree it was created from.
    /// - [`TreeError::Exhausted`] if every element has been yielded.
    pub fn next<'t>(&mut self, tree: &'t BSTree<T>) -> Result<&'t T, TreeError> {
        let node = self.guard.pop(tree, &mut self.stack)?;
        tree.nodes().push_left_spine(node.right, &mut self.stack);
        Ok(&node.element)
    }

    /// Removes the element currently at the root of `tree` and returns it. Note that this is
    /// the root's element, whichever element this cursor yielded last.
    ///
    /// Removing changes the tree, so this cursor can't be advanced afterwards.
    ///
    /// # Errors
    ///
    /// [`TreeError::IllegalState`] if [`next`][Self::next] was never called on this cursor or
    /// the tree is empty.
    pub fn remove(&mut self, tree: &mut BSTree<T>) -> Result<T, TreeError> {
        self.guard.remove(tree)
    }
}

/// A cursor over the elements of a tree root first, then the left subtree, then the right
/// subtree.
///
/// Created by [`BSTree::pre_order_cursor`].
#[derive(Clone, Debug)]
pub struct PreOrderCursor<T> {
    stack: Vec<Index>,
    guard: Guard,
    _element: PhantomData<fn(&T)>,
}

impl<T> PreOrderCursor<T> {
    pub(crate) fn new(tree: &BSTree<T>) -> Self {
        let stack = match tree.root() {
            Subtree::Empty => Vec::new(),
            Subtree::Node(id) => vec![id],
        };
        Self {
            stack,
            guard: Guard::new(tree),
            _element: PhantomData,
        }
    }

    /// Returns whether there are elements left to visit. This never fails, even if the tree
    /// has since been modified.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Yields the next element in pre-order.
    ///
    /// # Errors
    ///
    /// See [`InOrderCursor::next`].
    pub fn next<'t>(&mut self, tree: &'t BSTree<T>) -> Result<&'t T, TreeError> {
        let node = self.guard.pop(tree, &mut self.stack)?;
        push_children(node.left, node.right, &mut self.stack);
        Ok(&node.element)
    }

    /// Removes the element currently at the root of `tree` and returns it.
    ///
    /// # Errors
    ///
    /// See [`InOrderCursor::remove`].
    pub fn remove(&mut self, tree: &mut BSTree<T>) -> Result<T, TreeError> {
        self.guard.remove(tree)
    }
}
