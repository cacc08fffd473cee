use std::collections::TryReserveError;

/// Errors reported by [`CharList`](crate::CharList) and
/// [`StringLibrary`](crate::StringLibrary).
///
/// A target character that is not present is *not* an error: insertions and
/// deletions simply report that nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node storage could not grow to hold another character.
    #[error("failed to allocate a list node")]
    AllocationFailure,
    /// The cursor refers to a node that has been deleted, or the list was
    /// cleared after the cursor was created.
    #[error("cursor refers to a node that is no longer in the list")]
    StaleCursor,
    /// The cursor was created by a different list.
    #[error("cursor belongs to another list")]
    ForeignCursor,
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        log::error!("node allocation failed: {}", err);
        Error::AllocationFailure
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::AllocationFailure.to_string(),
            "failed to allocate a list node"
        );
        assert_eq!(
            Error::StaleCursor.to_string(),
            "cursor refers to a node that is no longer in the list"
        );
        assert_eq!(
            Error::ForeignCursor.to_string(),
            "cursor belongs to another list"
        );
    }

    #[test]
    fn reserve_failure_maps_to_allocation_failure() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(Error::from(err), Error::AllocationFailure);
    }
}
