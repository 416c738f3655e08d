//! Non-generic integer queue
//!
//! [`NativeIntQueue`] is the same mutex/condvar algorithm as
//! [`SliceQueue`](crate::SliceQueue), written out by hand for `i64` so the
//! cost of the generic wrapper can be measured against it.

use std::fmt;

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use crate::common::{CloseSemantics, SynchronizedQueue};
use crate::error::{GetError, PutError};

struct State {
    items: Vec<i64>,
    closed: bool,
}

/// A bounded blocking queue of `i64`
///
/// Its blocking [`put`](NativeIntQueue::put) returns nothing: with
/// flag-only close semantics there is no way for it to fail.
pub struct NativeIntQueue {
    state: Mutex<State>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl NativeIntQueue {
    /// Creates an empty queue holding at most `capacity` integers
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        debug!(capacity, "created native int queue");
        Self {
            state: Mutex::new(State {
                items: Vec::with_capacity(capacity),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Returns the number of queued integers
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Checks if the queue holds no integers
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// Checks if the queue is at capacity
    pub fn is_full(&self) -> bool {
        self.state.lock().items.len() == self.capacity
    }

    /// Returns the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an integer, waiting while the queue is full
    pub fn put(&self, item: i64) {
        let mut state = self.state.lock();
        while state.items.len() == self.capacity {
            self.not_full.wait(&mut state);
        }
        state.items.push(item);
        self.not_empty.notify_one();
    }

    /// Inserts an integer if there is room
    pub fn try_put(&self, item: i64) -> Result<(), PutError<i64>> {
        let mut state = self.state.lock();
        if state.items.len() == self.capacity {
            return Err(PutError::Full(item));
        }
        state.items.push(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the oldest integer, waiting while the queue is empty
    pub fn get(&self) -> Result<i64, GetError> {
        let mut state = self.state.lock();
        while state.items.is_empty() {
            self.not_empty.wait(&mut state);
        }
        let item = state.items.remove(0);
        self.not_full.notify_one();
        Ok(item)
    }

    /// Removes the oldest integer if there is one
    pub fn try_get(&self) -> Result<i64, GetError> {
        let mut state = self.state.lock();
        if state.items.is_empty() {
            return Err(GetError::Empty);
        }
        let item = state.items.remove(0);
        self.not_full.notify_one();
        Ok(item)
    }

    /// Sets the closed flag. Has no effect on any other operation.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.closed {
            state.closed = true;
            debug!(len = state.items.len(), capacity = self.capacity, "closed native int queue");
        }
    }

    /// Returns true once `close` has been called
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl SynchronizedQueue<i64> for NativeIntQueue {
    fn len(&self) -> usize {
        NativeIntQueue::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn put(&self, item: i64) -> Result<(), PutError<i64>> {
        NativeIntQueue::put(self, item);
        Ok(())
    }

    fn try_put(&self, item: i64) -> Result<(), PutError<i64>> {
        NativeIntQueue::try_put(self, item)
    }

    fn get(&self) -> Result<i64, GetError> {
        NativeIntQueue::get(self)
    }

    fn try_get(&self) -> Result<i64, GetError> {
        NativeIntQueue::try_get(self)
    }

    fn close(&self) {
        NativeIntQueue::close(self)
    }

    fn is_closed(&self) -> bool {
        NativeIntQueue::is_closed(self)
    }

    fn close_semantics(&self) -> CloseSemantics {
        CloseSemantics::Flag
    }
}

impl fmt::Display for NativeIntQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        write!(
            f,
            "NativeIntQueue {{ len: {}, cap: {}, closed: {} }}",
            state.items.len(),
            self.capacity,
            state.closed
        )
    }
}

impl fmt::Debug for NativeIntQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("NativeIntQueue")
            .field("items", &state.items)
            .field("capacity", &self.capacity)
            .field("closed", &state.closed)
            .finish()
    }
}
