//! On-demand single rotations around a named element.
//!
//! Unlike the rotations of a self-balancing tree these are never triggered by `insert` or
//! `remove`; they are only performed when asked for and do no balance analysis. A rotation
//! keeps the in-order sequence of the tree intact, so the tree remains a valid BST.

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::node::Link;
use crate::Tree;

/// The direction of a [`Tree::shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Promote the left child; the target moves down to the right.
    Right,
    /// Promote the right child; the target moves down to the left.
    Left,
}

impl Shift {
    /// Which child of the target node is promoted by this shift.
    pub fn promoted_side(self) -> &'static str {
        match self {
            Self::Right => "left",
            Self::Left => "right",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => f.write_str("right"),
            Self::Left => f.write_str("left"),
        }
    }
}

/// Where the node to rotate was found.
struct Target<'a, T> {
    /// The link that owns the target. This is `Tree::root` or a child link of the target's
    /// parent and is the only link that gets rebound by the rotation.
    link: &'a mut Link<T>,
    /// Whether `link` has a parent node, i.e. whether the target is not the root.
    has_parent: bool,
}

impl<T> Tree<T> {
    /// Rotates the tree right around the node holding `element`: its left child takes its place
    /// and it becomes that child's right child. The left child's old right subtree is reattached
    /// as the new left subtree of `element`'s node.
    ///
    /// ```text
    ///       parent                 parent
    ///         |                      |
    ///      element                  left
    ///      /     \     shift ->    /    \
    ///   left      z               x    element
    ///   /  \                            /   \
    ///  x    y                          y     z
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::Tree;
    ///
    /// let mut tree: Tree<_> = [4, 2, 7, 1, 3].into_iter().collect();
    /// tree.right_shift(&4).unwrap();
    ///
    /// assert_eq!(tree.levels(), vec![vec![&2], vec![&1, &4], vec![&3, &7]]);
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4, &7]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotFound`] when `element` is not in the tree.
    /// - [`TreeError::RotationImpossible`] when its node has no left child.
    ///
    /// The tree is left unchanged in both cases.
    pub fn right_shift(&mut self, element: &T) -> Result<(), TreeError>
    where
        T: Ord,
    {
        self.shift(element, Shift::Right)
    }

    /// Rotates the tree left around the node holding `element`: its right child takes its place
    /// and it becomes that child's left child. This is the inverse of [`Tree::right_shift`].
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [4, 2, 7, 6, 9].into_iter().collect();
    /// tree.left_shift(&4).unwrap();
    /// assert_eq!(tree.levels(), vec![vec![&7], vec![&4, &9], vec![&2, &6]]);
    ///
    /// assert_eq!(tree.left_shift(&5), Err(TreeError::NotFound));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotFound`] when `element` is not in the tree.
    /// - [`TreeError::RotationImpossible`] when its node has no right child.
    pub fn left_shift(&mut self, element: &T) -> Result<(), TreeError>
    where
        T: Ord,
    {
        self.shift(element, Shift::Left)
    }

    /// Rotates the tree around the node holding `element` in the given direction. See
    /// [`Tree::right_shift`] and [`Tree::left_shift`].
    pub fn shift(&mut self, element: &T, shift: Shift) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let Target { link, has_parent } = find(&mut self.root, element)?;
        rotate(link, shift)?;
        log::debug!(
            "{shift} shift promoted a {} child to {}",
            shift.promoted_side(),
            if has_parent { "its parent's link" } else { "the root" }
        );
        Ok(())
    }
}

/// Walks down from `root` looking for `element`, keeping hold of the link that owns the current
/// node so it can be rebound afterwards.
fn find<'a, T: Ord>(root: &'a mut Link<T>, element: &T) -> Result<Target<'a, T>, TreeError> {
    let mut link = root;
    let mut has_parent = false;

    loop {
        let ordering = match link.as_deref() {
            None => return Err(TreeError::NotFound),
            Some(node) => element.cmp(&node.element),
        };

        match (ordering, link) {
            (Ordering::Equal, link) => return Ok(Target { link, has_parent }),
            (Ordering::Less, Some(node)) => link = &mut node.left,
            (Ordering::Greater, Some(node)) => link = &mut node.right,
            (_, None) => return Err(TreeError::NotFound),
        }
        has_parent = true;
    }
}

/// Performs a single rotation of the subtree owned by `link`, rebinding `link` to the promoted
/// child.
fn rotate<T>(link: &mut Link<T>, shift: Shift) -> Result<(), TreeError> {
    let Some(mut old_root) = link.take() else {
        return Err(TreeError::NotFound);
    };

    let promoted = match shift {
        Shift::Right => old_root.left.take(),
        Shift::Left => old_root.right.take(),
    };
    let Some(mut new_root) = promoted else {
        *link = Some(old_root);
        return Err(TreeError::RotationImpossible { shift });
    };

    match shift {
        Shift::Right => {
            old_root.left = new_root.right.take();
            new_root.right = Some(old_root);
        }
        Shift::Left => {
            old_root.right = new_root.left.take();
            new_root.left = Some(old_root);
        }
    }

    *link = Some(new_root);
    Ok(())
}
