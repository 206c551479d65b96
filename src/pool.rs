//! Fixed-capacity buffer with oldest-first eviction.
//!
//! Backs both the particle pool and the trail point history. Pushing into a
//! full buffer drops the oldest entry, so the buffer always holds the most
//! recent `capacity` items in arrival order.

use std::collections::VecDeque;

/// Ring buffer of at most `capacity` items.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer. A zero capacity buffer never holds anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            // Allocation is capped; large capacities grow on demand.
            items: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Append an item, evicting the oldest one if the buffer is full.
    ///
    /// Returns the evicted item, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Keep only the items for which `keep` returns true, preserving order.
    pub fn retain_mut<F>(&mut self, keep: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.items.retain_mut(keep);
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut buf = RingBuffer::new(3);
        assert_eq!(buf.push(1), None);
        assert_eq!(buf.push(2), None);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        for i in 0..3 {
            buf.push(i);
        }
        assert_eq!(buf.push(3), Some(0));
        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(buf.len(), buf.capacity());
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut buf = RingBuffer::new(0);
        assert_eq!(buf.push("a"), Some("a"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut buf = RingBuffer::new(8);
        for i in 0..8 {
            buf.push(i);
        }
        buf.retain_mut(|v| *v % 2 == 0);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6]);

        // Freed slots are reusable without evicting survivors.
        buf.push(8);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.iter().next(), Some(&0));
    }
}
