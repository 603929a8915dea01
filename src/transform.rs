//! Whole-structure transforms expressed as relinking.
//!
//! Every operation here reorders or removes nodes by rewiring arena keys;
//! payloads are never copied or cloned. Empty and singular queues are valid
//! inputs throughout and come back unchanged wherever the operation has
//! nothing to do.

use crate::Queue;
use crate::ring;

impl<T> Queue<T> {
    /// Removes and returns the element at index `⌊n/2⌋` (zero-based), found
    /// with a slow/fast two-pointer walk.
    ///
    /// On `[1, 2, 3]` this removes `2`; on `[1, 2, 3, 4]` it removes `3`.
    /// Returns `None` on an empty queue.
    pub fn delete_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let head = self.head;
        let mut slow = self.arena[head].next;
        let mut fast = slow;
        // Slow advances one hop per two hops of fast; when fast wraps back
        // to the sentinel, slow sits on the lower middle.
        while fast != head && self.arena[fast].next != head {
            slow = self.arena[slow].next;
            fast = self.arena[self.arena[fast].next].next;
        }

        ring::unlink(&mut self.arena, slow);
        self.arena.remove(slow).value
    }

    /// Removes every element whose value is shared with at least one other
    /// element, using `==`. See [`delete_duplicates_by`].
    ///
    /// [`delete_duplicates_by`]: Queue::delete_duplicates_by
    pub fn delete_duplicates(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.delete_duplicates_by(|a, b| a == b)
    }

    /// Removes every element belonging to a run of equal values, leaving
    /// zero survivors per run, and returns the number removed.
    ///
    /// Precondition: the queue is sorted so that equal values are adjacent
    /// (`same` must agree with the sort order). The precondition is not
    /// checked; on unsorted input only adjacent runs collapse.
    ///
    /// Single left-to-right pass, O(n).
    pub fn delete_duplicates_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let head = self.head;
        let mut removed = 0;
        let mut curr = self.arena[head].next;

        while curr != head {
            // Find the end of the run of values equal to `curr`.
            let mut end = self.arena[curr].next;
            let mut run = 1;
            while end != head
                && same(ring::value(&self.arena, curr), ring::value(&self.arena, end))
            {
                run += 1;
                end = self.arena[end].next;
            }

            if run > 1 {
                let mut node = curr;
                while node != end {
                    let next = self.arena[node].next;
                    ring::unlink(&mut self.arena, node);
                    self.arena.remove(node);
                    node = next;
                }
                removed += run;
            }

            curr = end;
        }

        removed
    }

    /// Exchanges consecutive element pairs (1↔2, 3↔4, ...) by relinking.
    ///
    /// A trailing unpaired element is left in place.
    pub fn swap_pairs(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }

        let head = self.head;
        let mut prev = head;
        let mut first = self.arena[head].next;

        while first != head && self.arena[first].next != head {
            let second = self.arena[first].next;
            ring::move_after(&mut self.arena, second, prev);
            // `first` now trails `second`; the next pair starts after it.
            prev = first;
            first = self.arena[first].next;
        }
    }

    /// Reverses element order in place.
    ///
    /// Each node is moved to just after the sentinel in original traversal
    /// order; O(n), no allocation.
    pub fn reverse(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }

        let head = self.head;
        let mut curr = self.arena[head].next;
        while curr != head {
            let next = self.arena[curr].next;
            ring::move_after(&mut self.arena, curr, head);
            curr = next;
        }
    }

    /// Reverses each consecutive group of exactly `k` elements, counted from
    /// the head. A trailing partial group keeps its original order.
    ///
    /// No-op when `k <= 1` or the queue has fewer than two elements.
    pub fn reverse_k_group(&mut self, k: usize) {
        if k <= 1 || self.is_empty() || self.is_singular() {
            return;
        }

        let head = self.head;
        let groups = self.len() / k;

        // `last` anchors the insertion point: the node just before the
        // group being reversed.
        let mut last = head;
        let mut node = self.arena[head].next;

        for _ in 0..groups {
            for _ in 0..k {
                let next = self.arena[node].next;
                ring::move_after(&mut self.arena, node, last);
                node = next;
            }
            // `node` is now the first element after the reversed group.
            last = self.arena[node].prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(q: &Queue<u64>) -> Vec<u64> {
        q.iter().copied().collect()
    }

    #[test]
    fn delete_middle_odd_length() {
        let mut q: Queue<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(q.delete_middle(), Some(2));
        assert_eq!(values(&q), vec![1, 3]);
    }

    #[test]
    fn delete_middle_even_length() {
        let mut q: Queue<u64> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(q.delete_middle(), Some(3));
        assert_eq!(values(&q), vec![1, 2, 4]);
    }

    #[test]
    fn delete_middle_singular() {
        let mut q: Queue<u64> = [9].into_iter().collect();
        assert_eq!(q.delete_middle(), Some(9));
        assert!(q.is_empty());
    }

    #[test]
    fn delete_middle_empty() {
        let mut q: Queue<u64> = Queue::new();
        assert_eq!(q.delete_middle(), None);
    }

    #[test]
    fn delete_middle_longer() {
        let mut q: Queue<u64> = (1..=5).collect();
        assert_eq!(q.delete_middle(), Some(3));
        assert_eq!(values(&q), vec![1, 2, 4, 5]);

        let mut q: Queue<u64> = (1..=6).collect();
        assert_eq!(q.delete_middle(), Some(4));
        assert_eq!(values(&q), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn delete_duplicates_collapses_whole_runs() {
        let mut q: Queue<u64> = [1, 2, 2, 3, 3, 3, 4].into_iter().collect();
        assert_eq!(q.delete_duplicates(), 5);
        assert_eq!(values(&q), vec![1, 4]);
    }

    #[test]
    fn delete_duplicates_all_equal() {
        let mut q: Queue<u64> = [7, 7, 7].into_iter().collect();
        assert_eq!(q.delete_duplicates(), 3);
        assert!(q.is_empty());
    }

    #[test]
    fn delete_duplicates_run_at_head_and_tail() {
        let mut q: Queue<u64> = [1, 1, 2, 3, 3].into_iter().collect();
        assert_eq!(q.delete_duplicates(), 4);
        assert_eq!(values(&q), vec![2]);
    }

    #[test]
    fn delete_duplicates_distinct_input_untouched() {
        let mut q: Queue<u64> = (1..=4).collect();
        assert_eq!(q.delete_duplicates(), 0);
        assert_eq!(values(&q), vec![1, 2, 3, 4]);
    }

    #[test]
    fn delete_duplicates_empty_and_singular() {
        let mut q: Queue<u64> = Queue::new();
        assert_eq!(q.delete_duplicates(), 0);

        let mut q: Queue<u64> = [5].into_iter().collect();
        assert_eq!(q.delete_duplicates(), 0);
        assert_eq!(values(&q), vec![5]);
    }

    #[test]
    fn delete_duplicates_by_custom_equality() {
        // Compare on the tens digit only.
        let mut q: Queue<u64> = [11, 13, 25, 31].into_iter().collect();
        assert_eq!(q.delete_duplicates_by(|a, b| a / 10 == b / 10), 2);
        assert_eq!(values(&q), vec![25, 31]);
    }

    #[test]
    fn swap_pairs_even_count() {
        let mut q: Queue<u64> = (1..=4).collect();
        q.swap_pairs();
        assert_eq!(values(&q), vec![2, 1, 4, 3]);
    }

    #[test]
    fn swap_pairs_odd_count_leaves_trailing() {
        let mut q: Queue<u64> = (1..=5).collect();
        q.swap_pairs();
        assert_eq!(values(&q), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn swap_pairs_short_queues() {
        let mut q: Queue<u64> = Queue::new();
        q.swap_pairs();
        assert!(q.is_empty());

        let mut q: Queue<u64> = [1].into_iter().collect();
        q.swap_pairs();
        assert_eq!(values(&q), vec![1]);

        let mut q: Queue<u64> = [1, 2].into_iter().collect();
        q.swap_pairs();
        assert_eq!(values(&q), vec![2, 1]);
    }

    #[test]
    fn reverse_reverses() {
        let mut q: Queue<u64> = (1..=5).collect();
        q.reverse();
        assert_eq!(values(&q), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let original = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let mut q: Queue<u64> = original.iter().copied().collect();
        q.reverse();
        q.reverse();
        assert_eq!(values(&q), original);
    }

    #[test]
    fn reverse_short_queues() {
        let mut q: Queue<u64> = Queue::new();
        q.reverse();
        assert!(q.is_empty());

        let mut q: Queue<u64> = [1].into_iter().collect();
        q.reverse();
        assert_eq!(values(&q), vec![1]);
    }

    #[test]
    fn reverse_k_group_with_partial_tail() {
        let mut q: Queue<u64> = (1..=5).collect();
        q.reverse_k_group(3);
        assert_eq!(values(&q), vec![3, 2, 1, 4, 5]);
    }

    #[test]
    fn reverse_k_group_exact_groups() {
        let mut q: Queue<u64> = (1..=6).collect();
        q.reverse_k_group(2);
        assert_eq!(values(&q), vec![2, 1, 4, 3, 6, 5]);

        let mut q: Queue<u64> = (1..=6).collect();
        q.reverse_k_group(3);
        assert_eq!(values(&q), vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn reverse_k_group_k_equals_len_is_reverse() {
        let mut a: Queue<u64> = (1..=5).collect();
        let mut b: Queue<u64> = (1..=5).collect();

        a.reverse_k_group(5);
        b.reverse();
        assert_eq!(values(&a), values(&b));
    }

    #[test]
    fn reverse_k_group_k_one_is_noop() {
        let mut q: Queue<u64> = (1..=4).collect();
        q.reverse_k_group(1);
        assert_eq!(values(&q), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reverse_k_group_k_larger_than_len_is_noop() {
        let mut q: Queue<u64> = (1..=3).collect();
        q.reverse_k_group(7);
        assert_eq!(values(&q), vec![1, 2, 3]);
    }

    #[test]
    fn reverse_k_group_empty_and_singular() {
        let mut q: Queue<u64> = Queue::new();
        q.reverse_k_group(2);
        assert!(q.is_empty());

        let mut q: Queue<u64> = [1].into_iter().collect();
        q.reverse_k_group(2);
        assert_eq!(values(&q), vec![1]);
    }
}
