//! Queue backed by a bounded `crossbeam-channel`
//!
//! The channel does its own synchronization, so this backend has no storage
//! strategy. Closing drops the only long-lived sender: the channel then
//! rejects writes but keeps serving what it already holds. A second,
//! message-less channel disconnects on close so blocked puts wake up and fail.

use std::fmt;

use crossbeam_channel::{
    bounded, Receiver, RecvError, Select, Sender, TryRecvError, TrySendError,
};
use parking_lot::Mutex;
use tracing::debug;

use crate::common::{CloseSemantics, SynchronizedQueue};
use crate::error::{GetError, PutError};

/// A bounded queue with drain-on-close semantics
///
/// See [`CloseSemantics::Drain`].
pub struct ChannelQueue<T> {
    /// `None` once closed
    writers: Mutex<Option<Writers<T>>>,
    receiver: Receiver<T>,
    /// Never carries a message; disconnects when `close` drops its sender
    closed: Receiver<()>,
    capacity: usize,
}

/// Senders dropped together by `close`
struct Writers<T> {
    data: Sender<T>,
    _close: Sender<()>,
}

impl<T> ChannelQueue<T> {
    /// Creates an empty queue holding at most `capacity` items
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-capacity channel is a rendezvous
    /// point, not a queue.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        let (data, receiver) = bounded(capacity);
        let (close, closed) = bounded(0);
        debug!(capacity, "created channel queue");
        Self {
            writers: Mutex::new(Some(Writers {
                data,
                _close: close,
            })),
            receiver,
            closed,
            capacity,
        }
    }

    /// Clones the sender so a blocking send never holds the lock
    fn sender(&self) -> Option<Sender<T>> {
        self.writers.lock().as_ref().map(|w| w.data.clone())
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Checks if the queue is at capacity
    pub fn is_full(&self) -> bool {
        self.receiver.is_full()
    }

    /// Returns the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an item, waiting while the queue is full
    ///
    /// Fails with [`PutError::Closed`] if the queue is closed before or while
    /// the call waits for room.
    pub fn put(&self, item: T) -> Result<(), PutError<T>> {
        let Some(sender) = self.sender() else {
            return Err(PutError::Closed(item));
        };
        let item = match sender.try_send(item) {
            Ok(()) => return Ok(()),
            Err(TrySendError::Full(item)) => item,
            Err(TrySendError::Disconnected(item)) => return Err(PutError::Closed(item)),
        };

        let mut select = Select::new();
        let send = select.send(&sender);
        let close = select.recv(&self.closed);
        let oper = select.select();
        if oper.index() == send {
            oper.send(&sender, item).map_err(|err| PutError::Closed(err.into_inner()))
        } else {
            debug_assert_eq!(oper.index(), close);
            // Disconnected: `close` dropped the signal sender
            let _ = oper.recv(&self.closed);
            Err(PutError::Closed(item))
        }
    }

    /// Inserts an item if there is room
    pub fn try_put(&self, item: T) -> Result<(), PutError<T>> {
        let Some(sender) = self.sender() else {
            return Err(PutError::Closed(item));
        };
        sender.try_send(item).map_err(|err| match err {
            TrySendError::Full(item) => PutError::Full(item),
            TrySendError::Disconnected(item) => PutError::Closed(item),
        })
    }

    /// Removes the next item, waiting while the queue is empty
    ///
    /// Fails with [`GetError::Closed`] once the queue is closed and drained.
    pub fn get(&self) -> Result<T, GetError> {
        self.receiver.recv().map_err(|RecvError| GetError::Closed)
    }

    /// Removes the next item if there is one
    pub fn try_get(&self) -> Result<T, GetError> {
        self.receiver.try_recv().map_err(|err| match err {
            TryRecvError::Empty => GetError::Empty,
            TryRecvError::Disconnected => GetError::Closed,
        })
    }

    /// Stops accepting new items
    ///
    /// Puts blocked on a full queue wake up and fail with [`PutError::Closed`].
    pub fn close(&self) {
        if self.writers.lock().take().is_some() {
            debug!(len = self.len(), capacity = self.capacity, "closed channel queue");
        }
    }

    /// Returns true once `close` has been called
    pub fn is_closed(&self) -> bool {
        self.writers.lock().is_none()
    }
}

impl<T: Send> SynchronizedQueue<T> for ChannelQueue<T> {
    fn len(&self) -> usize {
        ChannelQueue::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn put(&self, item: T) -> Result<(), PutError<T>> {
        ChannelQueue::put(self, item)
    }

    fn try_put(&self, item: T) -> Result<(), PutError<T>> {
        ChannelQueue::try_put(self, item)
    }

    fn get(&self) -> Result<T, GetError> {
        ChannelQueue::get(self)
    }

    fn try_get(&self) -> Result<T, GetError> {
        ChannelQueue::try_get(self)
    }

    fn close(&self) {
        ChannelQueue::close(self)
    }

    fn is_closed(&self) -> bool {
        ChannelQueue::is_closed(self)
    }

    fn close_semantics(&self) -> CloseSemantics {
        CloseSemantics::Drain
    }
}

impl<T> fmt::Display for ChannelQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChannelQueue {{ len: {}, cap: {}, closed: {} }}",
            self.len(),
            self.capacity,
            self.is_closed()
        )
    }
}

impl<T> fmt::Debug for ChannelQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("closed", &self.is_closed())
            .finish()
    }
}
