//! Dynamic array storage

use super::Storage;

/// A `Vec` that appends at the end and removes from index 0
///
/// Front removal shifts the remaining items, so pops are O(n). This is the
/// simplest strategy and the reference the others are measured against.
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Storage<T> for DynamicArray<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, item: T) {
        assert!(!self.is_full(), "push on a full dynamic array");
        self.items.push(item);
    }

    fn pop(&mut self) -> T {
        assert!(!self.items.is_empty(), "pop on an empty dynamic array");
        self.items.remove(0)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
