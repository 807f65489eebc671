//! LRU Store - A byte-budgeted in-memory key-value storage backend
//!
//! Keys and values are opaque bytes. When a write would exceed the byte
//! budget, least recently used entries are evicted until it fits.
//!
//! ```
//! use lru_store::{SimpleLru, Storage};
//!
//! let mut storage = SimpleLru::new(10).unwrap();
//! storage.put(b"a", b"1");
//! storage.put(b"bb", b"22");
//! storage.put(b"ccc", b"333");
//!
//! assert_eq!(storage.get(b"a"), None);
//! assert_eq!(storage.current_size(), 10);
//! ```

pub mod config;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{Result, StorageError};
pub use storage::{GlobalLock, SharedStorage, SimpleLru, Storage, StorageStats};
