use std::{cmp::Ordering, collections::BinaryHeap};

use crate::dims::Dims;

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: f64,
    seq: u64,
    pos: Dims,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap pops the smallest key, older entries first on ties.
        other
            .key
            .total_cmp(&self.key)
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

/// Min-priority queue of cell positions, FIFO among equal keys.
#[derive(Debug, Default)]
pub(crate) struct MinQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl MinQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: f64, pos: Dims) {
        self.heap.push(Entry {
            key,
            seq: self.next_seq,
            pos,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, Dims)> {
        self.heap.pop().map(|e| (e.key, e.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_first() {
        let mut queue = MinQueue::new();
        queue.push(3.0, Dims(3, 0));
        queue.push(1.5, Dims(1, 0));
        queue.push(2.0, Dims(2, 0));

        assert_eq!(queue.pop(), Some((1.5, Dims(1, 0))));
        assert_eq!(queue.pop(), Some((2.0, Dims(2, 0))));
        assert_eq!(queue.pop(), Some((3.0, Dims(3, 0))));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn equal_keys_are_fifo() {
        let mut queue = MinQueue::new();
        for x in 0..5 {
            queue.push(1.0, Dims(x, 0));
        }
        queue.push(0.0, Dims(9, 9));

        assert_eq!(queue.heap.len(), 6);
        assert_eq!(queue.pop().map(|(_, p)| p), Some(Dims(9, 9)));
        for x in 0..5 {
            assert_eq!(queue.pop().map(|(_, p)| p), Some(Dims(x, 0)));
        }
    }
}
