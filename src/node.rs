//! Nodes and the recursive algorithms that rewire them.
//!
//! Nodes are stored in a generational arena owned by the tree. A parent refers to its
//! children through [`Subtree`] edges, which are either [`Subtree::Empty`] or the arena index
//! of a real node. Every algorithm that changes the shape of the tree takes the edge it works
//! on and returns the new root of that subtree; the caller relinks its own edge with the
//! result. No node keeps a pointer to its parent.

use std::cmp::Ordering;
use std::mem;

use generational_arena::{Arena, Index};

use crate::error::TreeError;

/// An edge to a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Subtree {
    /// A marker for the empty slot at the bottom of a subtree.
    Empty,
    /// A real node living in the arena.
    Node(Index),
}

/// A `Node` holds one element. It always has two children although those children may be
/// [`Empty`][Subtree::Empty].
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Subtree,
    pub(crate) right: Subtree,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            left: Subtree::Empty,
            right: Subtree::Empty,
        }
    }
}

/// Storage for every node of a tree.
#[derive(Clone, Debug)]
pub(crate) struct Nodes<T> {
    arena: Arena<Node<T>>,
}

impl<T> Nodes<T> {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// How many nodes are alive.
    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
    }

    /// Looks up a node that may have been removed since its index was handed out.
    pub(crate) fn get(&self, id: Index) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Looks up a node reachable from the root. Indices handed out by the tree stay valid
    /// until the node is unlinked.
    pub(crate) fn node(&self, id: Index) -> &Node<T> {
        &self.arena[id]
    }

    /// Moves a node's element out of the arena.
    pub(crate) fn take(&mut self, id: Index) -> Option<T> {
        self.arena.remove(id).map(|node| node.element)
    }

    /// Returns whether the subtree holds an element equal to `x`.
    pub(crate) fn contains(&self, at: Subtree, x: &T) -> bool
    where
        T: Ord,
    {
        match at {
            Subtree::Empty => false,
            Subtree::Node(id) => {
                let node = self.node(id);
                match x.cmp(&node.element) {
                    Ordering::Less => self.contains(node.left, x),
                    Ordering::Equal => true,
                    Ordering::Greater => self.contains(node.right, x),
                }
            }
        }
    }

    /// Inserts `x` below `at` and returns the new root of the subtree.
    ///
    /// Callers reject duplicates before descending. If an equal element is found anyway, `x`
    /// is dropped and the subtree is left as it was.
    pub(crate) fn insert(&mut self, at: Subtree, x: T) -> Subtree
    where
        T: Ord,
    {
        match at {
            Subtree::Empty => Subtree::Node(self.arena.insert(Node::new(x))),
            Subtree::Node(id) => {
                let (ordering, left, right) = self.compare(id, &x);
                match ordering {
                    Ordering::Less => {
                        let new_left = self.insert(left, x);
                        self.arena[id].left = new_left;
                    }
                    Ordering::Equal => {}
                    Ordering::Greater => {
                        let new_right = self.insert(right, x);
                        self.arena[id].right = new_right;
                    }
                }
                at
            }
        }
    }

    /// Removes the element equal to `x` from the subtree at `at`. Returns the new root of the
    /// subtree along with the removed element.
    ///
    /// If `x` isn't in the subtree no edge is touched.
    pub(crate) fn remove(&mut self, at: Subtree, x: &T) -> Result<(Subtree, T), TreeError>
    where
        T: Ord,
    {
        let id = match at {
            Subtree::Empty => return Err(TreeError::ElementNotFound),
            Subtree::Node(id) => id,
        };

        let (ordering, left, right) = self.compare(id, x);
        match ordering {
            Ordering::Less => {
                let (new_left, removed) = self.remove(left, x)?;
                self.arena[id].left = new_left;
                Ok((at, removed))
            }
            Ordering::Equal => Ok(self.unlink(id)),
            Ordering::Greater => {
                let (new_right, removed) = self.remove(right, x)?;
                self.arena[id].right = new_right;
                Ok((at, removed))
            }
        }
    }

    /// Removes the element held by the node at `id`. Returns what should take the node's
    /// place in its parent along with the removed element.
    ///
    /// With two children the node stays where it is and takes its in-order successor's
    /// element. Otherwise it is replaced by its only (possibly empty) child.
    pub(crate) fn unlink(&mut self, id: Index) -> (Subtree, T) {
        let node = self.node(id);
        match (node.left, node.right) {
            (Subtree::Node(_), Subtree::Node(right)) => {
                let (new_right, successor) = self.remove_min(right);
                let node = &mut self.arena[id];
                node.right = new_right;
                (Subtree::Node(id), mem::replace(&mut node.element, successor))
            }
            (Subtree::Empty, child) | (child, Subtree::Empty) => {
                let node = self
                    .arena
                    .remove(id)
                    .expect("Unlinking a node implies it is alive");
                (child, node.element)
            }
        }
    }

    /// Removes the leftmost node of the subtree rooted at `id`. Returns the new root of the
    /// subtree and the minimum element.
    fn remove_min(&mut self, id: Index) -> (Subtree, T) {
        match self.node(id).left {
            Subtree::Node(left) => {
                let (new_left, min) = self.remove_min(left);
                self.arena[id].left = new_left;
                (Subtree::Node(id), min)
            }
            Subtree::Empty => {
                let node = self
                    .arena
                    .remove(id)
                    .expect("Removing the minimum implies it is alive");
                (node.right, node.element)
            }
        }
    }

    /// Gets the height of this subtree. An empty subtree has a height of -1 and a leaf a
    /// height of 0.
    pub(crate) fn height(&self, at: Subtree) -> isize {
        match at {
            Subtree::Empty => -1,
            Subtree::Node(id) => {
                let node = self.node(id);
                1 + self.height(node.left).max(self.height(node.right))
            }
        }
    }

    pub(crate) fn min(&self, at: Subtree) -> Option<&T> {
        let mut id = match at {
            Subtree::Empty => return None,
            Subtree::Node(id) => id,
        };
        while let Subtree::Node(left) = self.node(id).left {
            id = left;
        }
        Some(&self.node(id).element)
    }

    pub(crate) fn max(&self, at: Subtree) -> Option<&T> {
        let mut id = match at {
            Subtree::Empty => return None,
            Subtree::Node(id) => id,
        };
        while let Subtree::Node(right) = self.node(id).right {
            id = right;
        }
        Some(&self.node(id).element)
    }

    /// Appends the subtree's elements to `out` in ascending order.
    pub(crate) fn collect_in_order<'a>(&'a self, at: Subtree, out: &mut Vec<&'a T>) {
        if let Subtree::Node(id) = at {
            let node = self.node(id);
            self.collect_in_order(node.left, out);
            out.push(&node.element);
            self.collect_in_order(node.right, out);
        }
    }

    /// Pushes `at` and every node along its chain of left edges onto `stack`. The top of the
    /// stack ends up being the subtree's minimum.
    pub(crate) fn push_left_spine(&self, mut at: Subtree, stack: &mut Vec<Index>) {
        while let Subtree::Node(id) = at {
            stack.push(id);
            at = self.node(id).left;
        }
    }

    /// Compares `x` against the element at `id` and hands back the node's edges so the caller
    /// can recurse without holding a borrow of the arena.
    fn compare(&self, id: Index, x: &T) -> (Ordering, Subtree, Subtree)
    where
        T: Ord,
    {
        let node = self.node(id);
        (x.cmp(&node.element), node.left, node.right)
    }
}
