//! This crate exposes an unbalanced Binary Search Tree (BST) together with a set of structural
//! algorithms over it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for elements takes `O(height)`. This tree never rebalances
//! itself, so inserting elements in sorted order degrades it into a linked
//! list and every recursive operation then recurses once per element.
//!
//! ## Structural operations
//!
//! Besides the usual insert/remove/contains, [`Tree`] can count its nodes,
//! check whether it's full, compare its shape or contents against another
//! tree, copy and mirror itself, and rotate around any element on demand
//! (see [`Tree::right_shift`] and [`Tree::left_shift`]).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod shift;
mod tree;

pub use error::TreeError;
pub use iter::Iter;
pub use shift::Shift;
pub use tree::Tree;
