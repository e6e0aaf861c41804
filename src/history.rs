//! Bounded newest-first history for recent search and analysis runs.

use std::collections::VecDeque;

/// Default number of entries the demo page shows per tab.
pub const DEFAULT_CAPACITY: usize = 5;

/// Fixed-capacity buffer that keeps the most recent entries first, evicting
/// the oldest once full.
#[derive(Debug, Clone)]
pub struct RecentHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RecentHistory<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RecentHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts at the front; drops the oldest entry when at capacity.
    pub fn record(&mut self, entry: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for RecentHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
