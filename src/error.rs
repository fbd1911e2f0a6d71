/// Errors reported by list and cursor operations.
///
/// Every variant is a local contract violation, not a transient condition:
/// nothing is retried or recovered inside the crate, and every failure
/// propagates synchronously to the immediate caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// [`pop_front`] or [`pop_back`] was called on a list with no elements.
    ///
    /// [`pop_front`]: crate::List::pop_front
    /// [`pop_back`]: crate::List::pop_back
    EmptyContainer,

    /// The cursor is parked on a boundary sentinel, which carries no value
    /// and cannot be removed, or a movement would step off a boundary.
    InvalidCursorPosition,

    /// The [`NodeRef`] names a node that has been removed from its list
    /// since the ref was produced.
    ///
    /// [`NodeRef`]: crate::NodeRef
    StaleHandle,
}

impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::EmptyContainer => f.write_str("list is empty"),
            ListError::InvalidCursorPosition => {
                f.write_str("cursor is at a boundary sentinel")
            }
            ListError::StaleHandle => f.write_str("node ref is stale"),
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn display_messages() {
        assert_eq!(ListError::EmptyContainer.to_string(), "list is empty");
        assert_eq!(
            ListError::InvalidCursorPosition.to_string(),
            "cursor is at a boundary sentinel"
        );
        assert_eq!(ListError::StaleHandle.to_string(), "node ref is stale");
    }
}
