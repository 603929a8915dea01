//! Slab-backed circular doubly-linked queue with whole-structure transforms.
//!
//! The core type is [`Queue`]: a deque whose elements live in a
//! [`slab::Slab`] arena and link to each other through a sentinel by stable
//! key. Separating storage from structure keeps every reordering operation
//! pure index rewiring: transforms never copy or clone a payload, and there
//! are no raw pointers to dangle.
//!
//! ```text
//! Slab<Node<T>>   - owns the payloads, provides stable keys
//! Queue<T>        - one sentinel key + the arena; walks the cycle
//! ```
//!
//! # Layers
//!
//! - **Linkage primitives** (`ring`, crate-private): link/unlink/move a
//!   node, splice and cut ranges, detect empty/singular rings. O(1) pointer
//!   rewiring, payload-agnostic.
//! - **Queue ADT** ([`Queue`]): push/pop at both ends, length, iteration,
//!   append, clear.
//! - **Structural transforms**: [`Queue::delete_middle`],
//!   [`Queue::delete_duplicates`], [`Queue::swap_pairs`],
//!   [`Queue::reverse`], [`Queue::reverse_k_group`].
//! - **Ordering**: stable merge sort ([`Queue::sort`], [`Queue::sort_by`])
//!   and monotonic filtering ([`Queue::ascend`], [`Queue::descend`]).
//! - **K-way merge** ([`merge`], [`QueueContext`]): folds many queues into
//!   one sorted survivor.
//!
//! # Quick Start
//!
//! ```
//! use ringq::Queue;
//!
//! let mut q: Queue<u64> = [3, 1, 2, 2, 5].into_iter().collect();
//!
//! q.sort(false);
//! assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2, 2, 3, 5]);
//!
//! // Collapse duplicate runs entirely: the 2s both go.
//! q.delete_duplicates();
//! assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! ```
//!
//! # Comparators
//!
//! Ordering is a pluggable point: every ordering operation has a `_by`
//! variant taking `FnMut(&T, &T) -> Ordering`, and the plain variants are
//! wrappers over `T: Ord`.
//!
//! # Concurrency
//!
//! None. A queue is single-owner, every operation completes synchronously
//! in time proportional to the queue length, and external synchronization
//! is the caller's job if a queue must cross threads.

#![warn(missing_docs)]

mod merge;
mod queue;
mod ring;
mod sort;
mod transform;

pub use merge::{QueueContext, merge, merge_by};
pub use queue::{Iter, Queue};
