//! The open list: a min-heap keyed by `(f_score, insertion_sequence)`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry, ordered by `(f, seq)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    f: i32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier with explicit membership tracking.
///
/// A cell is pushed once per membership. Its key is fixed at insertion:
/// a later, better `g` for a member does not move it in the heap.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    member: Vec<bool>,
    next_seq: u64,
}

impl Frontier {
    /// Empty frontier for a grid of `cells` cells.
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            member: vec![false; cells],
            next_seq: 0,
        }
    }

    /// Insert a non-member with the next insertion sequence number.
    pub(crate) fn insert(&mut self, idx: usize, f: i32) {
        debug_assert!(!self.member[idx], "cell {idx} is already in the frontier");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.member[idx] = true;
        self.heap.push(Entry { f, seq, idx });
    }

    /// Remove and return the member with the smallest `(f, seq)`.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let e = self.heap.pop()?;
        self.member[e.idx] = false;
        Some(e.idx)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.member[idx]
    }

    /// Number of insertions so far.
    #[inline]
    pub(crate) fn insertions(&self) -> u64 {
        self.next_seq
    }

    /// Number of live members.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
