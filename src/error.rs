//! Errors reported by [`Tree`][crate::Tree] operations.

use crate::shift::Shift;

/// Errors triggered by tree queries and shifts. Whenever one of these is returned the tree has
/// not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// Returned when asking an empty tree for its smallest or largest element.
    #[error("tree is empty")]
    Underflow,
    /// Returned when the element a shift was asked to pivot on is not in the tree.
    #[error("element not found in tree")]
    NotFound,
    /// Returned when the node to shift lacks the child that would be promoted.
    #[error("{shift} shift is not possible")]
    RotationImpossible {
        /// The direction that was requested.
        shift: Shift,
    },
}
