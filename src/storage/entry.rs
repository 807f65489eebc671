//! Storage Entry Module
//!
//! Defines a single key/value pair together with its recency links.

use super::arena::Handle;

// == Entry ==
/// One stored key/value pair and its position in the recency chain.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Key bytes, fixed for the life of the entry
    pub key: Vec<u8>,
    /// Value bytes, replaced in place on update
    pub value: Vec<u8>,
    /// Less recently used neighbour
    pub prev: Option<Handle>,
    /// More recently used neighbour
    pub next: Option<Handle>,
}

impl Entry {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    // == Cost ==
    /// Bytes this entry charges against the storage budget.
    pub fn cost(&self) -> usize {
        entry_cost(&self.key, &self.value)
    }
}

/// Budget cost of a key/value pair: the sum of their lengths.
pub fn entry_cost(key: &[u8], value: &[u8]) -> usize {
    key.len() + value.len()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_is_unlinked() {
        let entry = Entry::new(b"key".to_vec(), b"value".to_vec());

        assert_eq!(entry.key, b"key");
        assert_eq!(entry.value, b"value");
        assert!(entry.prev.is_none());
        assert!(entry.next.is_none());
    }

    #[test]
    fn test_entry_cost() {
        let entry = Entry::new(b"ab".to_vec(), b"cde".to_vec());
        assert_eq!(entry.cost(), 5);
        assert_eq!(entry_cost(b"", b""), 0);
    }
}
