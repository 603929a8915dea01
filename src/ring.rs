//! Circular linkage primitives over slab-backed nodes.
//!
//! Every queue is a cycle of nodes threaded through a sentinel; an empty
//! ring's sentinel links to itself. Nodes live in a [`slab::Slab`] and refer
//! to each other by key, so all of these operations are pure index rewiring:
//! they never allocate payloads and know nothing about element ordering.
//!
//! # Ring Invariant
//!
//! Starting from a sentinel and following `next` visits every live node of
//! that ring exactly once before returning to the sentinel; the `prev` walk
//! visits the same nodes in reverse. A node belongs to exactly one ring at a
//! time, and moving a node between positions is a single atomic relink.

use slab::Slab;

/// A node in a ring.
///
/// `value` is `None` only for sentinels; every payload node holds `Some`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Some(value),
            // Links are garbage until the node is linked into a ring.
            prev: usize::MAX,
            next: usize::MAX,
        }
    }
}

/// Allocates a fresh self-linked sentinel, returning its key.
#[inline]
pub(crate) fn new_ring<T>(arena: &mut Slab<Node<T>>) -> usize {
    let entry = arena.vacant_entry();
    let key = entry.key();
    entry.insert(Node {
        value: None,
        prev: key,
        next: key,
    });
    key
}

/// Returns `true` if the ring headed by `head` has no payload nodes.
#[inline]
pub(crate) fn is_empty<T>(arena: &Slab<Node<T>>, head: usize) -> bool {
    arena[head].next == head
}

/// Returns `true` if the ring headed by `head` has exactly one payload node.
#[inline]
pub(crate) fn is_singular<T>(arena: &Slab<Node<T>>, head: usize) -> bool {
    let node = &arena[head];
    node.next != head && node.next == node.prev
}

/// Inserts `node` immediately after `anchor`.
///
/// `node` must be unlinked (or freshly inserted); `anchor` must be part of a
/// well-formed ring.
#[inline]
pub(crate) fn link_after<T>(arena: &mut Slab<Node<T>>, node: usize, anchor: usize) {
    let next = arena[anchor].next;
    {
        let n = &mut arena[node];
        n.prev = anchor;
        n.next = next;
    }
    arena[anchor].next = node;
    arena[next].prev = node;
}

/// Inserts `node` immediately before `anchor`.
///
/// With the sentinel as anchor this is "insert at tail".
#[inline]
pub(crate) fn link_before<T>(arena: &mut Slab<Node<T>>, node: usize, anchor: usize) {
    let prev = arena[anchor].prev;
    link_after(arena, node, prev);
}

/// Unlinks `node` from its ring, reconnecting its former neighbors.
///
/// The node's own links are stale afterwards; relink or remove it before the
/// next traversal touches it.
#[inline]
pub(crate) fn unlink<T>(arena: &mut Slab<Node<T>>, node: usize) {
    let (prev, next) = {
        let n = &arena[node];
        (n.prev, n.next)
    };
    arena[prev].next = next;
    arena[next].prev = prev;
}

/// Moves `node` to immediately after `anchor` in one step.
#[inline]
pub(crate) fn move_after<T>(arena: &mut Slab<Node<T>>, node: usize, anchor: usize) {
    unlink(arena, node);
    link_after(arena, node, anchor);
}

/// Moves `node` to immediately before `anchor` in one step.
///
/// With the sentinel as anchor this is "move to tail".
#[inline]
pub(crate) fn move_before<T>(arena: &mut Slab<Node<T>>, node: usize, anchor: usize) {
    unlink(arena, node);
    link_before(arena, node, anchor);
}

/// Detaches the contiguous run `[first, last]` from its ring and reinserts
/// it, internal order intact, immediately after `anchor`.
///
/// `anchor` must not lie inside the run. Detaching the whole payload span of
/// a ring leaves that ring's sentinel self-linked again.
pub(crate) fn splice_range<T>(arena: &mut Slab<Node<T>>, first: usize, last: usize, anchor: usize) {
    let before = arena[first].prev;
    let after = arena[last].next;
    arena[before].next = after;
    arena[after].prev = before;

    let next = arena[anchor].next;
    arena[anchor].next = first;
    arena[first].prev = anchor;
    arena[last].next = next;
    arena[next].prev = last;
}

/// Splices every payload node of the ring headed by `src` to immediately
/// after `anchor`, leaving `src` empty.
#[inline]
pub(crate) fn splice<T>(arena: &mut Slab<Node<T>>, src: usize, anchor: usize) {
    if is_empty(arena, src) {
        return;
    }
    let first = arena[src].next;
    let last = arena[src].prev;
    splice_range(arena, first, last, anchor);
}

/// Splices every payload node of the ring headed by `src` to the tail of the
/// ring headed by `dst`, leaving `src` empty.
#[inline]
pub(crate) fn splice_tail<T>(arena: &mut Slab<Node<T>>, src: usize, dst: usize) {
    let tail = arena[dst].prev;
    splice(arena, src, tail);
}

/// Cuts the prefix `[src.next, upto]` out of the ring headed by `src` and
/// splices it into the empty ring headed by `dst`.
///
/// No-op when `src` is empty or `upto` is the sentinel itself.
#[inline]
pub(crate) fn cut_position<T>(arena: &mut Slab<Node<T>>, dst: usize, src: usize, upto: usize) {
    if is_empty(arena, src) || upto == src {
        return;
    }
    let first = arena[src].next;
    splice_range(arena, first, upto, dst);
}

/// Payload accessor.
///
/// # Panics
///
/// Panics if `node` is a sentinel.
#[inline]
pub(crate) fn value<T>(arena: &Slab<Node<T>>, node: usize) -> &T {
    arena[node].value.as_ref().expect("sentinel has no payload")
}
