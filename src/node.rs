//! The owned node graph behind a [`Tree`][crate::Tree].
//!
//! Every structural change is written as a function that takes ownership of a subtree and
//! hands back ownership of its (possibly different) replacement. The caller always overwrites
//! its own link with the result, so no node ever needs to know its parent.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element together with the two subtrees it owns.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a boxed leaf holding `element`.
    pub(crate) fn leaf(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    /// The node holding the smallest element of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// The node holding the largest element of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

/// Returns the subtree rooted at `link` with `element` added as a new leaf. If an equal element
/// is already present the subtree is returned unchanged and `element` is dropped.
pub(crate) fn insert<T: Ord>(link: Link<T>, element: T) -> Link<T> {
    let Some(mut node) = link else {
        return Some(Node::leaf(element));
    };

    match element.cmp(&node.element) {
        Ordering::Less => node.left = insert(node.left.take(), element),
        Ordering::Greater => node.right = insert(node.right.take(), element),
        Ordering::Equal => log::trace!("ignoring duplicate insert"),
    }

    Some(node)
}

/// Returns the subtree rooted at `link` without the node holding `element`.
///
/// A node with two children is not unlinked itself. Instead it takes over the element of its
/// in-order successor (the smallest node of its right subtree) and that successor, which has no
/// left child, is spliced out of the right subtree.
pub(crate) fn remove<T: Ord>(link: Link<T>, element: &T) -> Link<T> {
    let Some(mut node) = link else {
        log::trace!("element to remove not found");
        return None;
    };

    match element.cmp(&node.element) {
        Ordering::Less => {
            node.left = remove(node.left.take(), element);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove(node.right.take(), element);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (successor, rest) = take_min(right);
                node.element = successor;
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
            (only, None) | (None, only) => only,
        },
    }
}

/// Splits the smallest element off of the subtree rooted at `node`. Returns that element along
/// with whatever remains of the subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { element, right, .. } = *node;
            (element, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

pub(crate) fn contains<T: Ord>(link: &Link<T>, element: &T) -> bool {
    match link {
        None => false,
        Some(node) => match element.cmp(&node.element) {
            Ordering::Less => contains(&node.left, element),
            Ordering::Equal => true,
            Ordering::Greater => contains(&node.right, element),
        },
    }
}

pub(crate) fn count<T>(link: &Link<T>) -> usize {
    link.as_ref()
        .map_or(0, |node| count(&node.left) + 1 + count(&node.right))
}

/// Number of edges on the longest path down from `link`. An empty subtree has height `-1`.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Whether every node below `link` has either zero or two children.
pub(crate) fn is_full<T>(link: &Link<T>) -> bool {
    let Some(node) = link else {
        return true;
    };

    match (&node.left, &node.right) {
        (None, None) => true,
        (Some(_), Some(_)) => is_full(&node.left) && is_full(&node.right),
        _ => false,
    }
}

/// Whether two subtrees have the same shape, ignoring their elements.
pub(crate) fn same_shape<T, U>(a: &Link<T>, b: &Link<U>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => same_shape(&a.left, &b.left) && same_shape(&a.right, &b.right),
        _ => false,
    }
}

/// Whether two subtrees have the same shape and hold equal elements at every position.
pub(crate) fn equal<T: Ord>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.element.cmp(&b.element) == Ordering::Equal
                && equal(&a.left, &b.left)
                && equal(&a.right, &b.right)
        }
        _ => false,
    }
}

/// Whether `b` is the left-right reflection of `a`.
pub(crate) fn mirrors<T: Ord>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.element.cmp(&b.element) == Ordering::Equal
                && mirrors(&a.left, &b.right)
                && mirrors(&a.right, &b.left)
        }
        _ => false,
    }
}

/// A freshly allocated subtree with the same shape and elements as `link`.
pub(crate) fn copy<T: Clone>(link: &Link<T>) -> Link<T> {
    link.as_ref().map(|node| {
        Box::new(Node {
            element: node.element.clone(),
            left: copy(&node.left),
            right: copy(&node.right),
        })
    })
}

/// A freshly allocated subtree that is the left-right reflection of `link`.
pub(crate) fn mirror<T: Clone>(link: &Link<T>) -> Link<T> {
    link.as_ref().map(|node| {
        Box::new(Node {
            element: node.element.clone(),
            left: mirror(&node.right),
            right: mirror(&node.left),
        })
    })
}

/// Pushes, left to right, the elements found exactly `depth` levels below `link`.
pub(crate) fn level<'a, T>(link: &'a Link<T>, depth: usize, out: &mut Vec<&'a T>) {
    let Some(node) = link else {
        return;
    };

    match depth {
        0 => out.push(&node.element),
        _ => {
            level(&node.left, depth - 1, out);
            level(&node.right, depth - 1, out);
        }
    }
}
