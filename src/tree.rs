//! An unbalanced Binary Search Tree that owns its nodes outright. Mutating operations rebind
//! links in place and the tree never rebalances itself, so its shape is fully determined by
//! the order of inserts, removes and shifts.
//!
//! # Examples
//!
//! ```
//! use searchtree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find_min(), Err(TreeError::Underflow));
//!
//! for x in [4, 2, 7, 1, 3, 6, 9] {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&9));
//! assert_eq!(tree.count(), 7);
//!
//! // Removing a node with two children promotes its in-order successor.
//! tree.remove(&4);
//! assert_eq!(tree.levels()[0], [&6]);
//! assert!(!tree.contains(&4));
//! ```

use std::fmt;
use std::io;

use crate::error::TreeError;
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// A Binary Search Tree holding distinct elements. Elements are compared only through
/// [`Ord`]: two elements comparing [`Equal`][std::cmp::Ordering::Equal] are the same element
/// as far as the tree is concerned.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.make_empty();
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Ord> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Ord> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `element` into the tree. Inserting an element equal to one already present does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        self.root = node::insert(self.root.take(), element);
    }

    /// Removes `element` from the tree. If the tree does not contain it, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    /// tree.remove(&42);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.in_order(), [&1, &3]);
    /// ```
    pub fn remove(&mut self, element: &T)
    where
        T: Ord,
    {
        self.root = node::remove(self.root.take(), element);
    }

    /// Whether the tree holds an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        node::contains(&self.root, element)
    }

    /// Returns the smallest element in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(|root| &root.min().element)
            .ok_or(TreeError::Underflow)
    }

    /// Returns the largest element in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(|root| &root.max().element)
            .ok_or(TreeError::Underflow)
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    pub fn make_empty(&mut self) {
        // Unlink nodes one at a time so that dropping a long chain doesn't recurse per node.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// The number of elements in the tree. This walks the whole tree on every call.
    pub fn count(&self) -> usize {
        node::count(&self.root)
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single
    /// element has height `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// Whether every node has either zero or two children. An empty tree is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert!(tree.is_full());
    ///
    /// tree.insert(4);
    /// assert!(!tree.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        node::is_full(&self.root)
    }

    /// Whether `other` has the same shape as this tree. Elements are not compared, so the trees
    /// may even hold different types.
    pub fn compare_structure<U>(&self, other: &Tree<U>) -> bool {
        node::same_shape(&self.root, &other.root)
    }

    /// Whether `other` has the same shape as this tree and holds equal elements in the same
    /// positions. Two trees holding the same elements but built in a different order are
    /// generally not equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let a: Tree<_> = [4, 2, 7, 1, 3, 6, 9].into_iter().collect();
    /// let b: Tree<_> = [4, 2, 7, 1, 3, 6, 8].into_iter().collect();
    ///
    /// assert!(a.compare_structure(&b));
    /// assert!(!a.is_equal(&b));
    /// ```
    pub fn is_equal(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        node::equal(&self.root, &other.root)
    }

    /// Builds a new tree with the same shape and elements as this one but with its own nodes.
    /// Copying an empty tree gives an empty tree.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: node::copy(&self.root),
        }
    }

    /// Builds the left-right reflection of this tree: at every position the new tree's left
    /// subtree is the mirror of this tree's right subtree and vice versa.
    ///
    /// The reflection is generally _not_ a valid BST (its in-order sequence is descending), so
    /// searching or inserting into it gives meaningless results. Mirroring an empty tree gives
    /// an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mirror = tree.mirror();
    ///
    /// assert_eq!(mirror.in_order(), [&3, &2, &1]);
    /// assert!(tree.is_mirror(&mirror));
    /// assert!(mirror.mirror().is_equal(&tree));
    /// ```
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: node::mirror(&self.root),
        }
    }

    /// Whether `other` is equal to the [`mirror`][Tree::mirror] of this tree. This is checked
    /// directly, without building the mirror.
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        node::mirrors(&self.root, &other.root)
    }

    /// Iterates over the elements in in-order (left subtree, node, right subtree), which is
    /// ascending order unless the tree was built by [`Tree::mirror`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Collects the elements in in-order.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Collects the elements level by level, one `Vec` per depth starting from the root. Each
    /// level lists its elements left to right. An empty tree has no levels.
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let depths = usize::try_from(self.height() + 1).unwrap_or_default();
        (0..depths)
            .map(|depth| {
                let mut level = Vec::new();
                node::level(&self.root, depth, &mut level);
                level
            })
            .collect()
    }

    /// Writes the elements in sorted order, one per line. An empty tree is written as
    /// `Empty tree` so that it can be told apart from a tree with no output.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut out = Vec::new();
    /// Tree::<i32>::new().print_tree(&mut out).unwrap();
    /// assert_eq!(out, b"Empty tree\n");
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.print_tree(&mut out).unwrap();
    /// assert_eq!(out, b"1\n2\n3\n");
    /// ```
    pub fn print_tree<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return writeln!(out, "Empty tree");
        }

        for element in self {
            writeln!(out, "{element}")?;
        }
        Ok(())
    }

    /// Writes the elements level by level. Each level is one line of space separated elements.
    pub fn print_level<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for level in self.levels() {
            for element in level {
                write!(out, "{element} ")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
