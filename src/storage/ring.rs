//! Power-of-two ring buffer

use super::Storage;
use crate::utils::{round_up_to_power_of_2, IndexStrategy, PowerOf2Index};

/// A ring buffer with free-running head and tail counters
///
/// The slot array is rounded up to a power of two so positions map to slots
/// with a mask. The counters only ever increase (wrapping on overflow) and
/// `tail - head` is the length. The logical limit stays the requested
/// capacity, which may leave unused slots.
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    limit: usize,
}

impl<T> Storage<T> for RingBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        let slots = round_up_to_power_of_2(capacity);
        Self {
            slots: (0..slots).map(|_| None).collect(),
            head: 0,
            tail: 0,
            limit: capacity,
        }
    }

    fn push(&mut self, item: T) {
        assert!(!self.is_full(), "push on a full ring buffer");
        let idx = PowerOf2Index::get_index(self.tail, self.slots.len());
        self.slots[idx] = Some(item);
        self.tail = self.tail.wrapping_add(1);
    }

    fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop on an empty ring buffer");
        let idx = PowerOf2Index::get_index(self.head, self.slots.len());
        self.head = self.head.wrapping_add(1);
        self.slots[idx].take().expect("occupied ring slot")
    }

    fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head)
    }

    fn capacity(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_rounded_up() {
        let r = RingBuffer::<u8>::with_capacity(5);
        assert_eq!(r.slots.len(), 8);
        assert_eq!(r.capacity(), 5);
    }

    #[test]
    fn test_counters_wrap() {
        let mut r = RingBuffer::with_capacity(3);
        r.head = usize::MAX - 1;
        r.tail = usize::MAX - 1;
        for i in 0..3 {
            r.push(i);
        }
        assert_eq!(r.len(), 3);
        assert!(r.is_full());
        for i in 0..3 {
            assert_eq!(r.pop(), i);
        }
        assert!(r.is_empty());
    }
}
