//! Singly linked list with O(1) append

use std::ptr::NonNull;

use super::Storage;

struct Node<T> {
    item: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list that owns its nodes from the head
///
/// `tail` points into the chain owned by `head` so appends need no walk.
/// It is `None` exactly when the list is empty.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    capacity: usize,
}

// Safety: `tail` only aliases a node owned through `head`, so the list
// transfers between threads exactly like a `Box<Node<T>>` would.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Storage<T> for LinkedList<T> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            head: None,
            tail: None,
            len: 0,
            capacity,
        }
    }

    fn push(&mut self, item: T) {
        assert!(!self.is_full(), "push on a full linked list");
        let mut node = Box::new(Node { item, next: None });
        let raw = NonNull::from(&mut *node);
        match self.tail {
            // Safety: `tail` is the last node of the chain owned by `head`
            // and no other reference to it exists while we hold `&mut self`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(raw);
        self.len += 1;
    }

    fn pop(&mut self) -> T {
        let node = self.head.take().expect("pop on an empty linked list");
        let Node { item, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        item
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box drops
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.tail = None;
    }
}
