//! Heap-ordered priority storage

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Storage;

/// A value paired with the key that orders it in a priority queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PriorityItem<V, P> {
    /// The payload
    pub value: V,
    /// The ordering key
    pub priority: P,
}

impl<V, P> PriorityItem<V, P> {
    /// Creates a new item
    pub const fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }
}

/// Which end of the priority range is served first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriorityOrder {
    /// The greatest priority is removed first
    #[default]
    HighestFirst,
    /// The smallest priority is removed first
    LowestFirst,
}

/// Entry stored inside the binary heap
///
/// The heap is a max-heap, so "greater" means "served sooner". Equal
/// priorities compare by insertion sequence, earliest first.
struct PriorityEntry<V, P> {
    priority: P,
    sequence: u64,
    value: V,
    order: PriorityOrder,
}

impl<V, P: Ord> PartialEq for PriorityEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for PriorityEntry<V, P> {}

impl<V, P: Ord> PartialOrd for PriorityEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for PriorityEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_priority = match self.order {
            PriorityOrder::HighestFirst => self.priority.cmp(&other.priority),
            PriorityOrder::LowestFirst => other.priority.cmp(&self.priority),
        };
        by_priority.then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Bounded binary heap of [`PriorityItem`]s
///
/// `push` and `pop` are O(log n). Ties between equal priorities are broken
/// in insertion order, so equal-priority items come out FIFO.
pub struct PriorityStorage<V, P> {
    heap: BinaryHeap<PriorityEntry<V, P>>,
    capacity: usize,
    order: PriorityOrder,
    next_sequence: u64,
}

impl<V, P: Ord> PriorityStorage<V, P> {
    /// Creates empty storage serving items in the given order
    pub fn with_order(capacity: usize, order: PriorityOrder) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
            order,
            next_sequence: 0,
        }
    }

    /// Returns the configured order
    pub fn order(&self) -> PriorityOrder {
        self.order
    }
}

impl<V, P: Ord> Storage<PriorityItem<V, P>> for PriorityStorage<V, P> {
    fn with_capacity(capacity: usize) -> Self {
        Self::with_order(capacity, PriorityOrder::default())
    }

    fn push(&mut self, item: PriorityItem<V, P>) {
        assert!(!self.is_full(), "push on a full priority storage");
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.heap.push(PriorityEntry {
            priority: item.priority,
            sequence,
            value: item.value,
            order: self.order,
        });
    }

    fn pop(&mut self) -> PriorityItem<V, P> {
        let entry = self.heap.pop().expect("pop on an empty priority storage");
        PriorityItem::new(entry.value, entry.priority)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
