//! Storage Statistics Module
//!
//! Tracks lookup hits and misses, evictions, and byte usage.

use serde::Serialize;

// == Storage Stats ==
/// Snapshot of storage activity and occupancy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of `get` calls that found their key
    pub hits: u64,
    /// Number of `get` calls that did not
    pub misses: u64,
    /// Number of entries evicted to make room
    pub evictions: u64,
    /// Current number of entries
    pub entries: usize,
    /// Bytes currently charged against the budget
    pub bytes_used: usize,
    /// Byte budget
    pub max_bytes: usize,
}

impl StorageStats {
    // == Constructor ==
    /// Creates a new StorageStats with all counters at zero.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Occupancy ==
    /// Fills in the live entry count and byte usage.
    pub fn set_occupancy(&mut self, entries: usize, bytes_used: usize) {
        self.entries = entries;
        self.bytes_used = bytes_used;
    }
}
