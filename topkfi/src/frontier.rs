//! Support-ordered priority queue of candidates.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::candidate::Candidate;

struct Entry {
    seq: u64,
    cand: Candidate,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on support; the earlier push wins a tie.
        self.cand
            .support()
            .cmp(&other.cand.support())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Candidates awaiting extraction, always yielding the maximum support first.
///
/// Among candidates of equal support, the order is first-in first-out. Callers
/// should not depend on this.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate.
    pub fn push(&mut self, cand: Candidate) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, cand });
    }

    /// Removes and returns the candidate of maximum support.
    pub fn pop_max(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|e| e.cand)
    }

    /// Gets the candidate that [`Frontier::pop_max`] would return next.
    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.peek().map(|e| &e.cand)
    }

    /// Gets the number of candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Checks if no candidate is left.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(support: usize, item: i32) -> Candidate {
        Candidate::new(support, vec![item], vec![])
    }

    #[test]
    fn test_pop_order() {
        let mut frontier = Frontier::new();
        for (s, i) in [(2, 1), (7, 2), (1, 3), (7, 4), (5, 5), (0, 6)] {
            frontier.push(cand(s, i));
        }
        assert_eq!(frontier.len(), 6);
        assert_eq!(frontier.peek().map(Candidate::support), Some(7));

        let mut supports = vec![];
        while let Some(c) = frontier.pop_max() {
            supports.push(c.support());
        }
        assert_eq!(supports, vec![7, 7, 5, 2, 1, 0]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_max(), None);
    }

    #[test]
    fn test_tie_fifo() {
        let mut frontier = Frontier::new();
        frontier.push(cand(3, 10));
        frontier.push(cand(4, 20));
        frontier.push(cand(3, 30));
        frontier.push(cand(3, 40));
        let items: Vec<_> = std::iter::from_fn(|| frontier.pop_max())
            .map(|c| c.items()[0])
            .collect();
        assert_eq!(items, vec![20, 10, 30, 40]);
    }

    #[test]
    fn test_interleaved() {
        let mut frontier = Frontier::new();
        frontier.push(cand(4, 1));
        frontier.push(cand(2, 2));
        assert_eq!(frontier.pop_max().unwrap().support(), 4);
        frontier.push(cand(3, 3));
        frontier.push(cand(1, 4));
        assert_eq!(frontier.pop_max().unwrap().support(), 3);
        assert_eq!(frontier.pop_max().unwrap().support(), 2);
        assert_eq!(frontier.pop_max().unwrap().support(), 1);
    }
}
