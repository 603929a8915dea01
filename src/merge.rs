//! K-way merge of independently owned queues.
//!
//! Each input queue travels in a [`QueueContext`] that caches its element
//! count; a slice of contexts is the list-of-queues the merge folds into one
//! sorted survivor.

use core::cmp::Ordering;

use crate::Queue;

/// A queue paired with its cached element count.
///
/// The cache exists for the merge protocol only: [`merge`] zeroes the size
/// of every drained context and stores the true post-sort count in the
/// survivor. Outside the merge the cache is whatever the caller last wrote.
#[derive(Debug)]
pub struct QueueContext<T> {
    /// The owned input queue.
    pub queue: Queue<T>,
    /// Cached element count, maintained by [`merge`]/[`merge_by`].
    pub size: usize,
}

impl<T> QueueContext<T> {
    /// Wraps `queue`, caching its current length.
    pub fn new(queue: Queue<T>) -> Self {
        let size = queue.len();
        Self { queue, size }
    }
}

impl<T> From<Queue<T>> for QueueContext<T> {
    fn from(queue: Queue<T>) -> Self {
        Self::new(queue)
    }
}

/// Merges every queue in `groups` into the first one, sorted ascending (or
/// descending when `descending` is set), and returns the survivor's size.
///
/// Degenerate cases: an empty slice returns 0; a single context returns its
/// cached size unchanged, without sorting. Otherwise every context after the
/// first is drained (its queue left empty and usable, its size zeroed), the
/// concatenation is sorted once, and the first context's size is recomputed
/// from the links.
pub fn merge<T: Ord>(groups: &mut [QueueContext<T>], descending: bool) -> usize {
    let size = merge_by(groups, T::cmp);
    if descending && groups.len() >= 2 {
        groups[0].queue.reverse();
    }
    size
}

/// [`merge`] under an injected comparator, ascending with respect to `cmp`.
pub fn merge_by<T, F>(groups: &mut [QueueContext<T>], cmp: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    match groups {
        [] => 0,
        [only] => only.size,
        [first, rest @ ..] => {
            for group in rest.iter_mut() {
                first.queue.append(&mut group.queue);
                group.size = 0;
            }
            first.queue.sort_by(cmp);
            first.size = first.queue.len();
            first.size
        }
    }
}
