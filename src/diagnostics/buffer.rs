// SPDX-License-Identifier: MPL-2.0
//! Circular buffer backing the diagnostics history.
//!
//! Memory stays bounded: pushing into a full buffer evicts the oldest entry.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::{buffer_capacity_bounds, BufferCapacity};

/// A generic circular buffer with fixed capacity.
///
/// # Example
///
/// ```
/// use iced_toasts::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push(1);
/// buffer.push(2);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Meant for tests that want tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY, MIN_DIAGNOSTICS_CAPACITY,
    };

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_CAPACITY);
        assert_eq!(buffer_capacity_bounds::DEFAULT, DEFAULT_DIAGNOSTICS_CAPACITY);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_raw_capacity_still_holds_one_item() {
        let mut buffer: CircularBuffer<&str> = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(32));
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 32);
    }
}
