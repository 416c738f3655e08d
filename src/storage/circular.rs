//! Contiguous circular buffer

use super::Storage;
use crate::utils::{IndexStrategy, SimpleIndex};

/// A fixed slot array with a head index and a count
///
/// The tail is derived as `head + len` modulo the capacity, so the buffer
/// holds exactly `capacity` slots with no spare.
pub struct CircularBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> Storage<T> for CircularBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, item: T) {
        assert!(!self.is_full(), "push on a full circular buffer");
        let tail = SimpleIndex::get_index(self.head + self.len, self.slots.len());
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    fn pop(&mut self) -> T {
        let item = self.slots[self.head]
            .take()
            .expect("pop on an empty circular buffer");
        self.head = SimpleIndex::get_index(self.head + 1, self.slots.len());
        self.len -= 1;
        item
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}
