//! Global Lock Module
//!
//! Synchronized wrapper that serializes every storage call behind one
//! exclusive lock.

use parking_lot::{Mutex, MutexGuard};

use super::{SharedStorage, Storage};

// == Global Lock ==
/// Shares any [`Storage`] between threads.
///
/// Each operation holds the lock for its whole duration. Reads take the
/// exclusive lock too, since `get` reorders entries.
#[derive(Debug)]
pub struct GlobalLock<S> {
    inner: Mutex<S>,
}

impl<S: Storage> GlobalLock<S> {
    // == Constructor ==
    pub fn new(storage: S) -> Self {
        Self {
            inner: Mutex::new(storage),
        }
    }

    // == Lock ==
    /// Locks the storage for inspection or a multi-step sequence.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }

    /// Unwraps the storage.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S: Storage + Send> SharedStorage for GlobalLock<S> {
    fn put(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().put(key, value)
    }

    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().put_if_absent(key, value)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().set(key, value)
    }

    fn delete(&self, key: &[u8]) -> bool {
        self.inner.lock().delete(key)
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.lock().get(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::storage::SimpleLru;

    #[test]
    fn test_shared_operations() {
        let storage = GlobalLock::new(SimpleLru::new(100).unwrap());

        assert!(storage.put(b"k", b"v"));
        assert!(!storage.put_if_absent(b"k", b"w"));
        assert!(storage.set(b"k", b"x"));
        assert_eq!(storage.get(b"k"), Some(b"x".to_vec()));
        assert!(storage.delete(b"k"));
        assert_eq!(storage.get(b"k"), None);
    }

    #[test]
    fn test_shared_across_threads() {
        let storage = Arc::new(GlobalLock::new(SimpleLru::new(64).unwrap()));

        let handles: Vec<_> = (0..8u8)
            .map(|t| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    for i in 0..50u8 {
                        storage.put(&[t, i], &[i; 3]);
                        storage.get(&[t, i.wrapping_sub(1)]);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = storage.lock();
        assert!(guard.current_size() <= 64);
        guard.debug_validate_invariants();
    }

    #[test]
    fn test_into_inner() {
        let storage = GlobalLock::new(SimpleLru::new(10).unwrap());
        storage.put(b"a", b"1");

        let inner = storage.into_inner();
        assert!(inner.contains(b"a"));
    }

    #[test]
    fn test_dyn_shared_storage() {
        let storage: Box<dyn SharedStorage> =
            Box::new(GlobalLock::new(SimpleLru::new(10).unwrap()));

        assert!(storage.put(b"a", b"1"));
        assert_eq!(storage.get(b"a"), Some(b"1".to_vec()));
    }
}
