//! Unsynchronized storage strategies
//!
//! Each strategy is a plain single-threaded container with a fixed capacity.
//! They are only ever touched while the owning [`SyncQueue`](crate::SyncQueue)
//! holds its lock, and are interchangeable: swapping one for another changes
//! performance, never observable behavior.

mod circular;
mod list;
mod priority;
mod ring;
mod slice;

pub use circular::CircularBuffer;
pub use list::LinkedList;
pub use priority::{PriorityItem, PriorityOrder, PriorityStorage};
pub use ring::RingBuffer;
pub use slice::DynamicArray;

/// Trait for the storage behind a synchronized queue
///
/// `push` on a full storage and `pop` on an empty one are programming errors
/// and panic. The wrapper checks `is_full`/`is_empty` before calling them.
pub trait Storage<T> {
    /// Creates empty storage able to hold `capacity` items
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Appends an item at the tail
    fn push(&mut self, item: T);

    /// Removes and returns the head item
    fn pop(&mut self) -> T;

    /// Returns the number of stored items
    fn len(&self) -> usize;

    /// Returns the maximum number of items
    fn capacity(&self) -> usize;

    /// Checks if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the storage is at capacity
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fifo<S: Storage<u32>>() {
        let mut s = S::with_capacity(4);
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 4);

        // Wrap around a few times
        for round in 0..3 {
            for i in 0..4 {
                s.push(round * 10 + i);
            }
            assert!(s.is_full());
            for i in 0..4 {
                assert_eq!(s.pop(), round * 10 + i);
            }
            assert!(s.is_empty());
        }

        s.push(1);
        s.push(2);
        assert_eq!(s.pop(), 1);
        s.push(3);
        s.push(4);
        s.push(5);
        assert_eq!(s.len(), 4);
        assert_eq!(s.pop(), 2);
        assert_eq!(s.pop(), 3);
        assert_eq!(s.pop(), 4);
        assert_eq!(s.pop(), 5);
    }

    #[test]
    fn test_strategies_are_fifo() {
        fifo::<CircularBuffer<u32>>();
        fifo::<LinkedList<u32>>();
        fifo::<RingBuffer<u32>>();
        fifo::<DynamicArray<u32>>();
    }

    #[test]
    #[should_panic(expected = "full")]
    fn test_push_past_capacity_panics() {
        let mut s = CircularBuffer::with_capacity(1);
        s.push(1);
        s.push(2);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_pop_empty_panics() {
        let mut s = LinkedList::<u8>::with_capacity(1);
        s.pop();
    }
}
