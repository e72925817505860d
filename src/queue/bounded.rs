//! Fixed-capacity FIFO queue
//!
//! Keeps only the most recent `max_size` items. When the queue is full,
//! enqueueing silently evicts the oldest item first, so callers can push
//! without checking capacity (rolling windows of log or telemetry records).

use std::collections::VecDeque;

use super::error::QueueError;

/// Bounded first-in first-out queue
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    /// Maximum number of items retained
    max_size: usize,
    /// Items, oldest at the front
    items: VecDeque<T>,
}

impl<T> BoundedQueue<T> {
    /// Create a new queue holding at most `max_size` items
    ///
    /// Returns `QueueError::InvalidArgument` if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self, QueueError> {
        if max_size == 0 {
            return Err(QueueError::InvalidArgument("max_size must be positive"));
        }

        Ok(Self {
            max_size,
            items: VecDeque::with_capacity(max_size),
        })
    }

    /// Add an item as the newest element
    ///
    /// If the queue is already full the oldest item is dropped first.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.max_size {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Remove and return the oldest item
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return every item in insertion order
    pub fn dequeue_all(&mut self) -> Vec<T> {
        self.items.drain(..).collect()
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of items the queue retains
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Check if the queue holds `max_size` items
    pub fn is_full(&self) -> bool {
        self.items.len() == self.max_size
    }

    /// Check if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Snapshot of all items in insertion order, leaving the queue untouched
    pub fn values(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
