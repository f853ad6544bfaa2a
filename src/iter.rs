//! Borrowing and owning iterators over a [`BSTree`][crate::BSTree].
//!
//! These hold the tree (or a shared borrow of it) for their whole life, so the tree can't
//! change underneath them. For walks that may be interleaved with changes, see
//! [`cursor`][crate::cursor].

use std::iter::FusedIterator;

use generational_arena::Index;

use crate::node::{Nodes, Subtree};

/// An iterator over the elements of a tree in ascending order.
///
/// Created by [`BSTree::iter`][crate::BSTree::iter].
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    /// Ancestors whose element hasn't been yielded yet. The top is the next element.
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Subtree, len: usize) -> Self {
        let mut stack = Vec::new();
        nodes.push_left_spine(root, &mut stack);
        Self {
            nodes,
            stack,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.node(self.stack.pop()?);
        self.nodes.push_left_spine(node.right, &mut self.stack);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over the elements of a tree root first, then the left subtree, then the right
/// subtree.
///
/// Created by [`BSTree::pre_order_iter`][crate::BSTree::pre_order_iter].
pub struct PreOrderIter<'a, T> {
    nodes: &'a Nodes<T>,
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Subtree, len: usize) -> Self {
        let stack = match root {
            Subtree::Empty => Vec::new(),
            Subtree::Node(id) => vec![id],
        };
        Self {
            nodes,
            stack,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.node(self.stack.pop()?);
        push_children(node.left, node.right, &mut self.stack);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PreOrderIter<'a, T> {}
impl<'a, T> FusedIterator for PreOrderIter<'a, T> {}

/// Pushes the right child and then the left child so the left child is visited first.
pub(crate) fn push_children(left: Subtree, right: Subtree, stack: &mut Vec<Index>) {
    if let Subtree::Node(right) = right {
        stack.push(right);
    }
    if let Subtree::Node(left) = left {
        stack.push(left);
    }
}

/// An owning iterator over the elements of a tree in ascending order.
///
/// Created by calling `into_iter` on a [`BSTree`][crate::BSTree].
pub struct IntoIter<T> {
    nodes: Nodes<T>,
    order: std::vec::IntoIter<Index>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(nodes: Nodes<T>, root: Subtree) -> Self {
        let mut order = Vec::with_capacity(nodes.len());
        let mut stack = Vec::new();
        nodes.push_left_spine(root, &mut stack);
        while let Some(id) = stack.pop() {
            order.push(id);
            nodes.push_left_spine(nodes.node(id).right, &mut stack);
        }
        Self {
            nodes,
            order: order.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.nodes.take(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
