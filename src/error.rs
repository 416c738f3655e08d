//! Error types returned by queue operations
//!
//! Failed insertions hand the rejected item back to the caller, so nothing
//! is lost when a queue refuses a value.

use thiserror::Error;

/// Error returned by `put` and `try_put`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PutError<T> {
    /// The queue was at capacity. Only returned by non-blocking inserts.
    #[error("queue is full")]
    Full(T),

    /// The queue no longer accepts items.
    ///
    /// Only backends with [`CloseSemantics::Drain`](crate::CloseSemantics::Drain)
    /// return this.
    #[error("queue is closed")]
    Closed(T),
}

impl<T> PutError<T> {
    /// Recovers the item that could not be inserted
    pub fn into_inner(self) -> T {
        match self {
            PutError::Full(item) | PutError::Closed(item) => item,
        }
    }

    /// Returns true if the insert failed because the queue was full
    pub fn is_full(&self) -> bool {
        matches!(self, PutError::Full(_))
    }

    /// Returns true if the insert failed because the queue was closed
    pub fn is_closed(&self) -> bool {
        matches!(self, PutError::Closed(_))
    }
}

/// Error returned by `get` and `try_get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetError {
    /// The queue held no items. Only returned by non-blocking removals.
    #[error("queue is empty")]
    Empty,

    /// The queue was closed and every remaining item has been taken.
    ///
    /// This is end-of-stream, not a transient condition.
    #[error("queue is closed and drained")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_error_returns_item() {
        assert_eq!(PutError::Full(7).into_inner(), 7);
        assert_eq!(PutError::Closed("x").into_inner(), "x");
        assert!(PutError::Full(1).is_full());
        assert!(PutError::Closed(1).is_closed());
    }

    #[test]
    fn display_messages() {
        assert_eq!(PutError::Full(1).to_string(), "queue is full");
        assert_eq!(PutError::Closed(1).to_string(), "queue is closed");
        assert_eq!(GetError::Empty.to_string(), "queue is empty");
        assert_eq!(GetError::Closed.to_string(), "queue is closed and drained");
    }
}
