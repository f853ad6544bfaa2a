//! Errors reported by [`BSTree`][crate::BSTree] and its cursors.

/// Errors triggered by tree and cursor operations.
///
/// Every variant is a precondition violation reported to the caller. None of them leave the
/// tree partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The element to remove isn't in the tree (or the tree is empty).
    #[error("no such element")]
    ElementNotFound,
    /// A cursor was advanced after the tree it traverses was structurally modified.
    #[error("tree was modified since the cursor was created")]
    ConcurrentModification,
    /// A cursor's `remove` was called before its first `next`, or on an empty tree.
    #[error("cursor is not in a state that allows removal")]
    IllegalState,
    /// A cursor was advanced past its last element.
    #[error("cursor has no more elements")]
    Exhausted,
}
