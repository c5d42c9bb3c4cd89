use crate::cost::Cost;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open set: a Node, its Cost from the start when it was pushed and its f-score.
///
/// `seq` is the position in the push order. It breaks ties between equal f-scores in favor of
/// the entry that was discovered first.
pub(crate) struct HeuristicElement<N, C> {
    pub node: N,
    pub cost: C,
    pub f_score: C,
    seq: u64,
}

impl<N, C: Cost> PartialEq for HeuristicElement<N, C> {
    fn eq(&self, rhs: &Self) -> bool {
        self.f_score == rhs.f_score && self.seq == rhs.seq
    }
}
impl<N, C: Cost> Eq for HeuristicElement<N, C> {}
impl<N, C: Cost> PartialOrd for HeuristicElement<N, C> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<N, C: Cost> Ord for HeuristicElement<N, C> {
    // BinaryHeap is a max-heap, so both comparisons are reversed
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f_score
            .cmp(&self.f_score)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

/// The open set of a search, ordered by f-score.
///
/// Nodes are never removed or updated in place. A Node whose Cost improves is simply pushed
/// again, and the outdated entry is skipped by the search when it is eventually popped.
pub(crate) struct Frontier<N, C> {
    heap: BinaryHeap<HeuristicElement<N, C>>,
    next_seq: u64,
}

impl<N, C: Cost> Frontier<N, C> {
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, node: N, cost: C, f_score: C) {
        self.heap.push(HeuristicElement {
            node,
            cost,
            f_score,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<HeuristicElement<N, C>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
