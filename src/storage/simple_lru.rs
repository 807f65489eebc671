//! Simple LRU Storage Module
//!
//! Main storage engine: a key index over a recency list, with a byte budget
//! enforced by evicting from the least recently used end.

use std::collections::HashMap;

use tracing::{debug, info, trace};

use super::arena::Handle;
use super::entry::entry_cost;
use super::recency::RecencyList;
use super::{Storage, StorageStats};
use crate::config::Config;
use crate::error::{Result, StorageError};

// == Simple LRU ==
/// Byte-budgeted key-value storage with least-recently-used eviction.
///
/// Not synchronized; wrap it in [`GlobalLock`](super::GlobalLock) to share it.
#[derive(Debug)]
pub struct SimpleLru {
    /// Key to position in the recency list
    index: HashMap<Vec<u8>, Handle>,
    /// Entries ordered from least to most recently used
    list: RecencyList,
    /// Lookup and eviction counters
    stats: StorageStats,
    /// Byte budget for keys plus values
    max_size: usize,
}

impl SimpleLru {
    // == Constructor ==
    /// Creates an empty storage holding at most `max_size` bytes of keys and values.
    ///
    /// # Errors
    /// `StorageError::InvalidCapacity` if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(StorageError::InvalidCapacity(max_size));
        }
        info!(max_size, "LRU storage initialized");
        Ok(Self {
            index: HashMap::new(),
            list: RecencyList::new(),
            stats: StorageStats::new(max_size),
            max_size,
        })
    }

    /// Creates a storage sized from the given configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.max_size_bytes)
    }

    // == Accessors ==
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Bytes of keys and values currently stored.
    pub fn current_size(&self) -> usize {
        self.list.bytes()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Checks for a key without promoting it.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Keys from least to most recently used, without promoting any.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.list.iter().map(|entry| entry.key.as_slice())
    }

    // == Stats ==
    /// Returns a snapshot of the counters with live occupancy filled in.
    pub fn stats(&self) -> StorageStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.len(), self.current_size());
        stats
    }

    // == Clear ==
    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    // == Size Check ==
    fn check_fits(&self, key: &[u8], value: &[u8]) -> Result<usize> {
        let size = entry_cost(key, value);
        if size > self.max_size {
            return Err(StorageError::EntryTooLarge {
                size,
                max_size: self.max_size,
            });
        }
        Ok(size)
    }

    fn fits(&self, key: &[u8], value: &[u8]) -> bool {
        match self.check_fits(key, value) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "rejecting entry");
                false
            }
        }
    }

    // == Reclaim ==
    /// Evicts from the head until `incoming` bytes fit once `outgoing` bytes
    /// of the stored total are released.
    ///
    /// Callers guarantee `incoming <= max_size`, so the loop ends at the
    /// latest when the list is empty.
    fn reclaim(&mut self, incoming: usize, outgoing: usize) {
        while self.list.bytes() - outgoing + incoming > self.max_size {
            let Some(evicted) = self.list.pop_front() else {
                break;
            };
            self.index.remove(&evicted.key);
            self.stats.record_eviction();
            debug!(
                key_len = evicted.key.len(),
                cost = evicted.cost(),
                current_size = self.list.bytes(),
                "evicted least recently used entry"
            );
        }
    }

    // == Insert Path ==
    fn insert(&mut self, key: &[u8], value: &[u8]) {
        self.reclaim(entry_cost(key, value), 0);
        let handle = self.list.push_back(key.to_vec(), value.to_vec());
        self.index.insert(key.to_vec(), handle);
    }

    // == Update Path ==
    // Promote before reclaiming so the updated entry is never the eviction
    // candidate, and size the reclaim by the value delta only.
    fn update(&mut self, handle: Handle, value: &[u8]) {
        self.list.promote(handle);
        let old_len = self
            .list
            .get(handle)
            .map(|entry| entry.value.len())
            .unwrap_or(0);
        self.reclaim(value.len(), old_len);
        self.list.replace_value(handle, value.to_vec());
    }

    /// Checks index/chain agreement on top of the list's own invariants.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.index.len(), self.list.len());
        assert!(self.list.bytes() <= self.max_size);
        for entry in self.list.iter() {
            let handle = self.index.get(&entry.key).expect("chain key missing from index");
            let indexed = self.list.get(*handle).expect("index points at freed entry");
            assert_eq!(indexed.key, entry.key);
        }
    }
}

impl Storage for SimpleLru {
    fn put(&mut self, key: &[u8], value: &[u8]) -> bool {
        if !self.fits(key, value) {
            return false;
        }
        trace!(key_len = key.len(), value_len = value.len(), "put");
        match self.index.get(key).copied() {
            Some(handle) => self.update(handle, value),
            None => self.insert(key, value),
        }
        true
    }

    fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool {
        if !self.fits(key, value) || self.index.contains_key(key) {
            return false;
        }
        trace!(key_len = key.len(), value_len = value.len(), "put_if_absent");
        self.insert(key, value);
        true
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> bool {
        if !self.fits(key, value) {
            return false;
        }
        let Some(handle) = self.index.get(key).copied() else {
            return false;
        };
        trace!(key_len = key.len(), value_len = value.len(), "set");
        self.update(handle, value);
        true
    }

    fn delete(&mut self, key: &[u8]) -> bool {
        match self.index.remove(key) {
            Some(handle) => {
                self.list.remove(handle);
                trace!(key_len = key.len(), "delete");
                true
            }
            None => false,
        }
    }

    fn get(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        let Some(handle) = self.index.get(key).copied() else {
            self.stats.record_miss();
            return None;
        };
        self.list.promote(handle);
        self.stats.record_hit();
        self.list.get(handle).map(|entry| entry.value.clone())
    }
}
