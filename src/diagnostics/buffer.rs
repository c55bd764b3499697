// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};
use std::collections::VecDeque;

/// Number of events the diagnostics buffer retains, clamped to valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the supported range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use community_gallery::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
///
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

    /// Creates a new circular buffer with a raw capacity value.
    ///
    /// Intended for tests with small capacities.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
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
