//! Ordering algorithms: stable merge sort and monotonic filtering.
//!
//! The comparator is injected at every seam (`sort_by`, `ascend_by`,
//! `descend_by`); the `Ord`-based entry points are thin wrappers over those.
//! Sorting works on whole rings inside one arena: the recursion cuts a ring
//! into two halves headed by temporary sentinels, sorts each, and merges
//! back by moving the smaller front element to the output tail.

use core::cmp::Ordering;

use slab::Slab;

use crate::Queue;
use crate::ring::{self, Node};

/// Recursive stable merge sort of the ring headed by `head`.
///
/// Base case: empty or singular rings are already sorted. The split point is
/// found with the same slow/fast walk as middle deletion.
fn sort_ring<T, F>(arena: &mut Slab<Node<T>>, head: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if ring::is_empty(arena, head) || ring::is_singular(arena, head) {
        return;
    }

    let mut slow = arena[head].next;
    let mut fast = arena[slow].next;
    while fast != head && arena[fast].next != head {
        slow = arena[slow].next;
        fast = arena[arena[fast].next].next;
    }

    // Temporary sentinels live in the same arena and are freed after the
    // merge; halves never leave the queue's ownership.
    let left = ring::new_ring(arena);
    let right = ring::new_ring(arena);
    ring::cut_position(arena, left, head, slow);
    ring::splice_tail(arena, head, right);

    sort_ring(arena, left, cmp);
    sort_ring(arena, right, cmp);
    merge_rings(arena, head, left, right, cmp);

    arena.remove(left);
    arena.remove(right);
}

/// Merges two sorted rings into the empty ring headed by `head`, preferring
/// the left ring on ties so equal elements keep their relative order.
fn merge_rings<T, F>(arena: &mut Slab<Node<T>>, head: usize, left: usize, right: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while !ring::is_empty(arena, left) && !ring::is_empty(arena, right) {
        let l = arena[left].next;
        let r = arena[right].next;
        let take_left = cmp(ring::value(arena, l), ring::value(arena, r)) != Ordering::Greater;
        let node = if take_left { l } else { r };
        ring::move_before(arena, node, head);
    }

    // At most one of these has anything left; splice it over in bulk.
    ring::splice_tail(arena, left, head);
    ring::splice_tail(arena, right, head);
}

impl<T> Queue<T> {
    /// Stable-sorts the queue in ascending order under `cmp`.
    ///
    /// Recursive merge sort: O(n log n) moves, no payload copies, equal
    /// elements keep their relative input order.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort_ring(&mut self.arena, self.head, &mut cmp);
    }

    /// Sorts the queue in ascending order, or descending when `descending`
    /// is set.
    ///
    /// Descending is ascending-sort-then-reverse, so tie order under
    /// descending is the reverse of ascending tie order.
    pub fn sort(&mut self, descending: bool)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
        if descending {
            self.reverse();
        }
    }

    /// Removes every element that has a strictly smaller element somewhere
    /// to its right, leaving a non-decreasing sequence. Returns the number
    /// of survivors.
    pub fn ascend(&mut self) -> usize
    where
        T: Ord,
    {
        self.ascend_by(T::cmp)
    }

    /// [`ascend`](Queue::ascend) under an injected comparator.
    pub fn ascend_by<F>(&mut self, cmp: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.filter_dominated(cmp, Ordering::Less)
    }

    /// Removes every element that has a strictly greater element somewhere
    /// to its right, leaving a non-increasing sequence. Returns the number
    /// of survivors.
    pub fn descend(&mut self) -> usize
    where
        T: Ord,
    {
        self.descend_by(T::cmp)
    }

    /// [`descend`](Queue::descend) under an injected comparator.
    pub fn descend_by<F>(&mut self, cmp: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.filter_dominated(cmp, Ordering::Greater)
    }

    /// Shared body of `ascend`/`descend`: reverse, sweep keeping elements
    /// that strictly improve on the best seen so far, reverse back.
    fn filter_dominated<F>(&mut self, mut cmp: F, keep: Ordering) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_empty() || self.is_singular() {
            return self.len();
        }

        self.reverse();

        let head = self.head;
        let mut best = self.arena[head].next;
        let mut curr = self.arena[best].next;
        while curr != head {
            let next = self.arena[curr].next;
            let ord = cmp(
                ring::value(&self.arena, curr),
                ring::value(&self.arena, best),
            );
            // Only strict domination deletes; elements equal to the best
            // survive.
            if ord == keep.reverse() {
                ring::unlink(&mut self.arena, curr);
                self.arena.remove(curr);
            } else if ord == keep {
                best = curr;
            }
            curr = next;
        }

        self.reverse();
        self.len()
    }
}
