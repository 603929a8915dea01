//! The queue ADT: a sentinel-headed ring that owns its elements.
//!
//! A [`Queue`] owns one arena plus the key of its sentinel. Destroying the
//! queue drops every element along with the sentinel; there are no
//! back-references that could outlive it.
//!
//! # Example
//!
//! ```
//! use ringq::Queue;
//!
//! let mut q: Queue<u64> = Queue::new();
//! q.push_back(1);
//! q.push_back(2);
//! q.push_front(0);
//!
//! assert_eq!(q.len(), 3);
//! assert_eq!(q.pop_front(), Some(0));
//! assert_eq!(q.pop_back(), Some(2));
//! assert_eq!(q.pop_back(), Some(1));
//! assert_eq!(q.pop_back(), None);
//! ```

use slab::Slab;

use crate::ring::{self, Node};

/// A doubly-linked, circularly-sentineled queue.
///
/// Elements live in a slab arena and link to each other by stable key, so
/// the structural transforms in this crate are pure index relinking with no
/// per-step allocation. The queue is strictly sequential: interior elements
/// are reached by walking from an end.
pub struct Queue<T> {
    pub(crate) arena: Slab<Node<T>>,
    pub(crate) head: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let mut arena = Slab::new();
        let head = ring::new_ring(&mut arena);
        Self { arena, head }
    }

    /// Creates an empty queue with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = Slab::with_capacity(capacity + 1);
        let head = ring::new_ring(&mut arena);
        Self { arena, head }
    }

    /// Returns the number of elements by walking the cycle.
    ///
    /// Deliberately O(n): the count is always re-derived from the links
    /// themselves, never from a cached counter that could go stale.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut curr = self.arena[self.head].next;
        while curr != self.head {
            count += 1;
            curr = self.arena[curr].next;
        }
        count
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        ring::is_empty(&self.arena, self.head)
    }

    /// Returns `true` if the queue holds exactly one element.
    #[inline]
    pub fn is_singular(&self) -> bool {
        ring::is_singular(&self.arena, self.head)
    }

    /// Inserts `value` at the head of the queue.
    pub fn push_front(&mut self, value: T) {
        let node = self.arena.insert(Node::new(value));
        ring::link_after(&mut self.arena, node, self.head);
    }

    /// Inserts `value` at the tail of the queue.
    pub fn push_back(&mut self, value: T) {
        let node = self.arena.insert(Node::new(value));
        ring::link_before(&mut self.arena, node, self.head);
    }

    /// Removes and returns the head element, or `None` if the queue is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let node = self.arena[self.head].next;
        ring::unlink(&mut self.arena, node);
        self.arena.remove(node).value
    }

    /// Removes and returns the tail element, or `None` if the queue is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let node = self.arena[self.head].prev;
        ring::unlink(&mut self.arena, node);
        self.arena.remove(node).value
    }

    /// Returns a reference to the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(ring::value(&self.arena, self.arena[self.head].next))
    }

    /// Returns a reference to the tail element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(ring::value(&self.arena, self.arena[self.head].prev))
    }

    /// Moves every element of `other` to the back of `self`, preserving
    /// order. `other` is left empty but remains a valid queue.
    ///
    /// Elements change arenas, so this is O(n) in `other.len()` with each
    /// move O(1); ownership of each element transfers atomically.
    pub fn append(&mut self, other: &mut Queue<T>) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Drops every element, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over references to elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            head: self.head,
            front: self.arena[self.head].next,
            back: self.arena[self.head].prev,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to queue elements, head to tail.
pub struct Iter<'a, T> {
    arena: &'a Slab<Node<T>>,
    head: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.head {
            return None;
        }

        let node = &self.arena[self.front];

        // Front and back met: this is the last element.
        if self.front == self.back {
            self.front = self.head;
            self.back = self.head;
        } else {
            self.front = node.next;
        }

        node.value.as_ref()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back == self.head {
            return None;
        }

        let node = &self.arena[self.back];

        if self.front == self.back {
            self.front = self.head;
            self.back = self.head;
        } else {
            self.back = node.prev;
        }

        node.value.as_ref()
    }
}
