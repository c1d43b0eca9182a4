//! A bucketed min-priority queue with FIFO tie-breaking.
//!
//! Items are stored in a priority-ordered map of FIFO buckets: dequeuing
//! takes from the smallest-priority bucket, and items sharing a priority
//! leave in the order they arrived.

use std::collections::{BTreeMap, VecDeque};

/// A min-priority queue keyed by an `i32` priority.
///
/// Lower priorities are dequeued first. Among items with the same priority,
/// those enqueued earlier are dequeued first (FIFO).
pub struct BucketQueue<T> {
    buckets: BTreeMap<i32, VecDeque<T>>,
    len: usize,
}

impl<T> BucketQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Insert an item under the given priority.
    pub fn enqueue(&mut self, item: T, priority: i32) {
        self.buckets.entry(priority).or_default().push_back(item);
        self.len += 1;
    }

    /// Remove and return the earliest-inserted item with the smallest
    /// priority, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let mut entry = self.buckets.first_entry()?;
        // Drained buckets are removed eagerly, so the front bucket is
        // never empty.
        let item = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.len -= 1;
        Some(item)
    }

    /// The smallest priority currently queued, if any.
    pub fn peek_priority(&self) -> Option<i32> {
        self.buckets.keys().next().copied()
    }

    /// Total number of items queued.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for BucketQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_enqueue_dequeue() {
        let mut q = BucketQueue::new();
        q.enqueue("a", 3);
        q.enqueue("b", 1);
        q.enqueue("c", 2);

        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_fifo_same_priority() {
        let mut q = BucketQueue::new();
        q.enqueue("first", 1);
        q.enqueue("second", 1);
        q.enqueue("third", 1);

        assert_eq!(q.dequeue(), Some("first"));
        assert_eq!(q.dequeue(), Some("second"));
        assert_eq!(q.dequeue(), Some("third"));
    }

    #[test]
    fn test_interleaved_priorities() {
        let mut q = BucketQueue::new();
        q.enqueue(("a", 2), 2);
        q.enqueue(("b", 0), 0);
        q.enqueue(("c", 2), 2);
        q.enqueue(("d", 1), 1);
        q.enqueue(("e", 0), 0);

        // Non-decreasing priority, FIFO within equal priority.
        let order: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(
            order,
            vec![("b", 0), ("e", 0), ("d", 1), ("a", 2), ("c", 2)]
        );
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut q = BucketQueue::<i32>::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);

        q.enqueue(7, 4);
        q.enqueue(8, 4);
        assert!(!q.is_empty());
        assert_eq!(q.len(), 2);

        q.dequeue();
        assert_eq!(q.len(), 1);
        q.dequeue();
        assert!(q.is_empty());
    }

    #[test]
    fn test_peek_priority() {
        let mut q = BucketQueue::new();
        assert_eq!(q.peek_priority(), None);
        q.enqueue('x', 5);
        q.enqueue('y', 2);
        assert_eq!(q.peek_priority(), Some(2));
        q.dequeue();
        assert_eq!(q.peek_priority(), Some(5));
    }
}
