//! Errors returned by the list containers.

/// Errors triggered by removing the tail of a list.
///
/// Both variants describe a caller asking for something the list can't give. A list returning one
/// of these has not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PopError {
    /// The list holds no nodes at all.
    #[error("cannot pop from an empty list")]
    Empty,
    /// The list holds a node but popping needs the predecessor of the tail, which a single-node
    /// singly linked list doesn't have.
    #[error("cannot pop the tail of a list with fewer than two elements")]
    InsufficientElements,
}
