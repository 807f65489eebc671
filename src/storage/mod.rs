//! Storage Module
//!
//! Byte-budgeted key-value storage with least-recently-used eviction.
//!
//! Two interfaces are exposed:
//! - [`Storage`]: the unsynchronized core, `&mut self` on every call.
//! - [`SharedStorage`]: the same operations through `&self`, provided by
//!   [`GlobalLock`] which serializes each call behind one exclusive lock.

mod arena;
mod entry;
mod global_lock;
mod recency;
mod simple_lru;
mod stats;


pub use arena::Handle;
pub use entry::entry_cost;
pub use global_lock::GlobalLock;
pub use simple_lru::SimpleLru;
pub use stats::StorageStats;

// == Storage Trait ==
/// Key-value operations of a single-writer storage.
///
/// `get` takes `&mut self` because a read promotes its entry.
pub trait Storage {
    /// Inserts or replaces `key`. Fails only if the entry can never fit.
    fn put(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Inserts `key` only if it is absent. Returns true if it was inserted.
    fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Replaces the value of an existing `key`. Returns true if it existed.
    fn set(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Removes `key`. Returns true if it existed.
    fn delete(&mut self, key: &[u8]) -> bool;

    /// Copies out the value of `key` and marks it most recently used.
    fn get(&mut self, key: &[u8]) -> Option<Vec<u8>>;
}

// == Shared Storage Trait ==
/// Key-value operations callable concurrently through a shared reference.
pub trait SharedStorage: Send + Sync {
    fn put(&self, key: &[u8], value: &[u8]) -> bool;

    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool;

    fn set(&self, key: &[u8], value: &[u8]) -> bool;

    fn delete(&self, key: &[u8]) -> bool;

    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;
}
