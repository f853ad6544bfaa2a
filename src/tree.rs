//! A mutable, unbalanced BST. Every operation works on the tree in place: inserting links a
//! new node at the bottom of the search path and removing splices a node out (or overwrites
//! it with its in-order successor). Nothing is ever rebalanced so inserting sorted input
//! degenerates the tree into a chain.
//!
//! # Examples
//!
//! ```
//! use bstree::BSTree;
//!
//! let mut tree = BSTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Equal elements are rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::cursor::{InOrderCursor, PreOrderCursor};
use crate::error::TreeError;
use crate::iter::{IntoIter, Iter, PreOrderIter};
use crate::node::{Nodes, Subtree};

/// Source of the identity each tree stamps onto the cursors it creates.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one version of one tree. Any structural change to the tree produces a new
/// `Stamp`, which is how cursors notice they went stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Stamp {
    tree: u64,
    generation: u64,
}

/// A Binary Search Tree of unique, totally ordered elements. This can be used for inserting,
/// finding, and removing elements as well as walking them in order or pre-order.
pub struct BSTree<T> {
    root: Subtree,
    nodes: Nodes<T>,
    len: usize,
    id: u64,
    /// Bumped on every structural change.
    generation: u64,
}

impl<T> Default for BSTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone has its own identity so cursors created from one tree can't be used on the other.
impl<T> Clone for BSTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            nodes: self.nodes.clone(),
            len: self.len,
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
        }
    }
}

impl<T> BSTree<T> {
    /// Generates a new, empty `BSTree`.
    pub fn new() -> Self {
        Self {
            root: Subtree::Empty,
            nodes: Nodes::new(),
            len: 0,
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
        }
    }

    /// Inserts `x` into the tree. Returns `false`, leaving the tree untouched, if an equal
    /// element is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.to_vec(), vec![3, 5]);
    /// ```
    pub fn insert(&mut self, x: T) -> bool
    where
        T: Ord,
    {
        if self.nodes.contains(self.root, &x) {
            trace!(len = self.len, "rejected duplicate element");
            return false;
        }

        self.root = self.nodes.insert(self.root, x);
        self.len += 1;
        self.touch();
        trace!(len = self.len, "inserted element");
        true
    }

    /// Removes the element equal to `x` from the tree and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ElementNotFound`] if the tree holds no such element. The tree is
    /// left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BSTree, TreeError};
    ///
    /// let mut tree: BSTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(TreeError::ElementNotFound));
    /// assert_eq!(tree.to_vec(), vec![5, 8]);
    /// ```
    pub fn remove(&mut self, x: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        let (root, removed) = match self.nodes.remove(self.root, x) {
            Ok(found) => found,
            Err(e) => {
                trace!(len = self.len, "element to remove not found");
                return Err(e);
            }
        };
        self.finish_removal(root);
        Ok(removed)
    }

    /// Removes whatever element is at the root of the tree.
    pub(crate) fn remove_root(&mut self) -> Result<T, TreeError> {
        let id = match self.root {
            Subtree::Empty => return Err(TreeError::ElementNotFound),
            Subtree::Node(id) => id,
        };
        let (root, removed) = self.nodes.unlink(id);
        self.finish_removal(root);
        Ok(removed)
    }

    fn finish_removal(&mut self, root: Subtree) {
        self.root = root;
        self.len -= 1;
        self.touch();
        trace!(len = self.len, "removed element");
    }

    /// Returns whether the tree holds an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: Ord,
    {
        self.nodes.contains(self.root, x)
    }

    /// Returns whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root == Subtree::Empty
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has a
    /// height of -1 and a tree with a single element a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        self.nodes.height(self.root)
    }

    /// The smallest element in the tree.
    pub fn min(&self) -> Option<&T> {
        self.nodes.min(self.root)
    }

    /// The largest element in the tree.
    pub fn max(&self) -> Option<&T> {
        self.nodes.max(self.root)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.root = Subtree::Empty;
        self.nodes.clear();
        self.len = 0;
        self.touch();
        trace!("cleared tree");
    }

    /// Copies the elements into a `Vec` in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.nodes.collect_in_order(self.root, &mut out);
        out.into_iter().cloned().collect()
    }

    /// Copies the elements into a fixed-size slice in ascending order.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.to_vec().into_boxed_slice()
    }

    /// Iterates over the elements in ascending order. The tree can't be changed while the
    /// iterator is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root, self.len)
    }

    /// Iterates over the elements root first, then the left subtree, then the right subtree.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(&self.nodes, self.root, self.len)
    }

    /// Creates a cursor walking the elements in ascending order. Unlike [`iter`][Self::iter],
    /// the cursor doesn't borrow the tree; changing the tree invalidates it instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BSTree, TreeError};
    ///
    /// let mut tree: BSTree<_> = [2, 1, 3].into_iter().collect();
    /// let mut cursor = tree.in_order_cursor();
    ///
    /// assert_eq!(cursor.next(&tree), Ok(&1));
    ///
    /// tree.insert(4);
    /// assert_eq!(cursor.next(&tree), Err(TreeError::ConcurrentModification));
    /// ```
    pub fn in_order_cursor(&self) -> InOrderCursor<T> {
        InOrderCursor::new(self)
    }

    /// Creates a cursor walking the elements root first, then the left subtree, then the right
    /// subtree. See [`in_order_cursor`][Self::in_order_cursor].
    pub fn pre_order_cursor(&self) -> PreOrderCursor<T> {
        PreOrderCursor::new(self)
    }

    pub(crate) fn root(&self) -> Subtree {
        self.root
    }

    pub(crate) fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    pub(crate) fn stamp(&self) -> Stamp {
        Stamp {
            tree: self.id,
            generation: self.generation,
        }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<T> fmt::Debug for BSTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the elements in ascending order, e.g. `[1, 3, 4]`, or `[]` when empty.
impl<T> fmt::Display for BSTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

/// Two trees are equal when they hold the same elements, whatever their shape.
impl<T> PartialEq for BSTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for BSTree<T> where T: Eq {}

impl<T> FromIterator<T> for BSTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BSTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T> IntoIterator for &'a BSTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BSTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.root)
    }
}
