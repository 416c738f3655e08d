//! The synchronized queue contract
//!
//! This module provides the trait every backend implements, along with the
//! flag describing how a backend reacts to `close`.

use std::fmt;

use crate::error::{GetError, PutError};

/// How a backend behaves once `close` has been called
///
/// The two families deliberately disagree. Callers that rely on
/// end-of-stream draining should branch on this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseSemantics {
    /// Further puts fail with [`PutError::Closed`]. Items already queued stay
    /// retrievable; once they are gone, gets fail with [`GetError::Closed`]
    /// instead of blocking.
    Drain,

    /// Closing only sets the observable flag. Every operation keeps working
    /// exactly as it did before.
    Flag,
}

/// Trait for bounded, thread-safe queues
///
/// All backends share a fixed capacity chosen at construction. `put` and
/// `get` are the only operations that may block; everything else returns
/// after a short critical section. `len` is read under the same lock as the
/// mutating operations, so it never observes a half-finished call.
///
/// The `Display` impl is a diagnostic snapshot containing at least the
/// current length and the capacity.
pub trait SynchronizedQueue<T>: fmt::Display + Send + Sync {
    /// Returns the number of queued items
    fn len(&self) -> usize;

    /// Returns the fixed capacity of the queue
    fn capacity(&self) -> usize;

    /// Inserts an item, blocking while the queue is full
    ///
    /// Wakes one thread blocked in `get`. Fails only on a closed
    /// [`CloseSemantics::Drain`] backend.
    fn put(&self, item: T) -> Result<(), PutError<T>>;

    /// Inserts an item without blocking
    ///
    /// Returns [`PutError::Full`] if the queue is at capacity, leaving it unchanged.
    fn try_put(&self, item: T) -> Result<(), PutError<T>>;

    /// Removes the next item, blocking while the queue is empty
    ///
    /// Wakes one thread blocked in `put`. Fails only when a closed
    /// [`CloseSemantics::Drain`] backend has been drained.
    fn get(&self) -> Result<T, GetError>;

    /// Removes the next item without blocking
    ///
    /// Returns [`GetError::Empty`] if there is nothing to take.
    fn try_get(&self) -> Result<T, GetError>;

    /// Marks the queue closed. Calling it again has no further effect.
    fn close(&self);

    /// Returns true once `close` has been called
    fn is_closed(&self) -> bool;

    /// Describes what `close` does for this backend
    fn close_semantics(&self) -> CloseSemantics;

    /// Checks if the queue holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the queue is at capacity
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
