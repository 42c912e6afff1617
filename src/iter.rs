//! Borrowed in-order iteration.

use crate::node::{Link, Node};

/// An iterator over the elements of a [`Tree`][crate::Tree] in in-order. Created by
/// [`Tree::iter`][crate::Tree::iter].
///
/// The iterator borrows the tree, so the tree can't be changed while it's alive.
pub struct Iter<'a, T> {
    /// Nodes whose element hasn't been yielded yet but whose left subtree has been pushed.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.element)
    }
}
