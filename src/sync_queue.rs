//! Mutex/condition-variable queue generic over its storage
//!
//! This module provides [`SyncQueue`], which adds blocking and non-blocking
//! access on top of any [`Storage`] strategy, plus aliases for the stock
//! strategies.

use std::fmt;
use std::marker::PhantomData;

use parking_lot::{Condvar, Mutex};
use tracing::debug;

use crate::common::{CloseSemantics, SynchronizedQueue};
use crate::error::{GetError, PutError};
use crate::storage::{
    CircularBuffer, DynamicArray, LinkedList, PriorityItem, PriorityOrder, PriorityStorage,
    RingBuffer, Storage,
};

/// State guarded by the queue lock
struct Inner<S> {
    storage: S,
    closed: bool,
}

/// A bounded blocking queue over a pluggable storage strategy
///
/// One mutex protects the storage and the closed flag. Producers wait on
/// `not_full`, consumers on `not_empty`. Closing only sets the flag: see
/// [`CloseSemantics::Flag`].
pub struct SyncQueue<T, S> {
    inner: Mutex<Inner<S>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
    _marker: PhantomData<fn(T) -> T>,
}

/// Synchronized queue over a [`CircularBuffer`]
pub type CircularQueue<T> = SyncQueue<T, CircularBuffer<T>>;

/// Synchronized queue over a [`LinkedList`]
pub type ListQueue<T> = SyncQueue<T, LinkedList<T>>;

/// Synchronized queue over a [`RingBuffer`]
pub type RingQueue<T> = SyncQueue<T, RingBuffer<T>>;

/// Synchronized queue over a [`DynamicArray`]
pub type SliceQueue<T> = SyncQueue<T, DynamicArray<T>>;

/// Synchronized queue serving [`PriorityItem`]s by priority
pub type PriorityQueue<V, P> = SyncQueue<PriorityItem<V, P>, PriorityStorage<V, P>>;

impl<T, S: Storage<T>> SyncQueue<T, S> {
    /// Creates an empty queue holding at most `capacity` items
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_storage(S::with_capacity(capacity))
    }

    /// Wraps already-constructed storage
    ///
    /// # Panics
    ///
    /// Panics if the storage has zero capacity or is not empty.
    pub fn with_storage(storage: S) -> Self {
        let capacity = storage.capacity();
        assert!(capacity > 0, "capacity must be > 0");
        assert!(storage.is_empty(), "storage must start empty");
        debug!(
            storage = std::any::type_name::<S>(),
            capacity, "created synchronized queue"
        );
        Self {
            inner: Mutex::new(Inner {
                storage,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
            _marker: PhantomData,
        }
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.inner.lock().storage.len()
    }

    /// Checks if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.inner.lock().storage.is_empty()
    }

    /// Checks if the queue is at capacity
    pub fn is_full(&self) -> bool {
        self.inner.lock().storage.is_full()
    }

    /// Returns the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an item, waiting while the queue is full
    ///
    /// Never fails: closing this queue does not reject writes.
    pub fn put(&self, item: T) -> Result<(), PutError<T>> {
        let mut inner = self.inner.lock();
        while inner.storage.is_full() {
            self.not_full.wait(&mut inner);
        }
        inner.storage.push(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Inserts an item if there is room
    pub fn try_put(&self, item: T) -> Result<(), PutError<T>> {
        let mut inner = self.inner.lock();
        if inner.storage.is_full() {
            return Err(PutError::Full(item));
        }
        inner.storage.push(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the next item, waiting while the queue is empty
    ///
    /// Never fails: on an empty queue this waits for a producer even after
    /// `close`.
    pub fn get(&self) -> Result<T, GetError> {
        let mut inner = self.inner.lock();
        while inner.storage.is_empty() {
            self.not_empty.wait(&mut inner);
        }
        let item = inner.storage.pop();
        self.not_full.notify_one();
        Ok(item)
    }

    /// Removes the next item if there is one
    pub fn try_get(&self) -> Result<T, GetError> {
        let mut inner = self.inner.lock();
        if inner.storage.is_empty() {
            return Err(GetError::Empty);
        }
        let item = inner.storage.pop();
        self.not_full.notify_one();
        Ok(item)
    }

    /// Sets the closed flag. Has no effect on any other operation.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if !inner.closed {
            inner.closed = true;
            debug!(
                len = inner.storage.len(),
                capacity = self.capacity,
                "closed synchronized queue"
            );
        }
    }

    /// Returns true once `close` has been called
    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}

impl<V, P: Ord> PriorityQueue<V, P> {
    /// Creates an empty priority queue serving items in `order`
    ///
    /// [`SyncQueue::new`] uses [`PriorityOrder::HighestFirst`].
    pub fn with_order(capacity: usize, order: PriorityOrder) -> Self {
        Self::with_storage(PriorityStorage::with_order(capacity, order))
    }
}

impl<T, S> SynchronizedQueue<T> for SyncQueue<T, S>
where
    T: Send,
    S: Storage<T> + Send,
{
    fn len(&self) -> usize {
        SyncQueue::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn put(&self, item: T) -> Result<(), PutError<T>> {
        SyncQueue::put(self, item)
    }

    fn try_put(&self, item: T) -> Result<(), PutError<T>> {
        SyncQueue::try_put(self, item)
    }

    fn get(&self) -> Result<T, GetError> {
        SyncQueue::get(self)
    }

    fn try_get(&self) -> Result<T, GetError> {
        SyncQueue::try_get(self)
    }

    fn close(&self) {
        SyncQueue::close(self)
    }

    fn is_closed(&self) -> bool {
        SyncQueue::is_closed(self)
    }

    fn close_semantics(&self) -> CloseSemantics {
        CloseSemantics::Flag
    }
}

impl<T, S: Storage<T>> fmt::Display for SyncQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        write!(
            f,
            "SyncQueue {{ len: {}, cap: {}, closed: {} }}",
            inner.storage.len(),
            self.capacity,
            inner.closed
        )
    }
}

impl<T, S: Storage<T>> fmt::Debug for SyncQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SyncQueue")
            .field("storage", &std::any::type_name::<S>())
            .field("len", &inner.storage.len())
            .field("capacity", &self.capacity)
            .field("closed", &inner.closed)
            .finish()
    }
}
