//! Recency List Module
//!
//! Doubly-linked chain of entries stored in an [`Arena`] and linked by
//! [`Handle`]. Head is the least recently used entry, tail the most recently
//! used one. The list also keeps the running byte total of its entries so the
//! total changes in the same step as the chain.
//!
//! ```text
//!   head ─► [h1] ◄──► [h2] ◄──► [h3] ◄── tail
//!           LRU                 MRU
//! ```

use super::arena::{Arena, Handle};
use super::entry::Entry;

// == Recency List ==
/// Recency-ordered chain with O(1) splice given a handle.
#[derive(Debug, Default)]
pub struct RecencyList {
    arena: Arena<Entry>,
    head: Option<Handle>,
    tail: Option<Handle>,
    /// Sum of `key.len() + value.len()` over all entries
    bytes: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Back ==
    /// Appends a new entry as the most recently used one.
    pub fn push_back(&mut self, key: Vec<u8>, value: Vec<u8>) -> Handle {
        let entry = Entry::new(key, value);
        let cost = entry.cost();
        let handle = self.arena.insert(entry);
        self.attach_back(handle);
        self.bytes += cost;
        handle
    }

    // == Remove ==
    /// Splices an entry out of the chain and frees it.
    ///
    /// Works for the head, the tail, a sole entry, or an interior entry.
    /// Returns None for a stale handle.
    pub fn remove(&mut self, handle: Handle) -> Option<Entry> {
        self.detach(handle)?;
        let entry = self.arena.remove(handle)?;
        self.bytes -= entry.cost();
        Some(entry)
    }

    // == Pop Front ==
    /// Removes and returns the least recently used entry.
    pub fn pop_front(&mut self) -> Option<Entry> {
        let head = self.head()?;
        self.remove(head)
    }

    // == Promote ==
    /// Moves an entry to the tail without freeing it.
    ///
    /// No-op when the entry already is the tail. Returns false for a stale handle.
    pub fn promote(&mut self, handle: Handle) -> bool {
        if !self.arena.contains(handle) {
            return false;
        }
        if self.tail() == Some(handle) {
            return true;
        }
        self.detach(handle).is_some() && self.attach_back(handle).is_some()
    }

    // == Replace Value ==
    /// Overwrites an entry's value in place, returning the previous value.
    ///
    /// Recency position is left untouched.
    pub fn replace_value(&mut self, handle: Handle, value: Vec<u8>) -> Option<Vec<u8>> {
        let entry = self.arena.get_mut(handle)?;
        let old = std::mem::replace(&mut entry.value, value);
        self.bytes = self.bytes - old.len() + entry.value.len();
        Some(old)
    }

    // == Accessors ==
    pub fn head(&self) -> Option<Handle> {
        self.head
    }

    pub fn tail(&self) -> Option<Handle> {
        self.tail
    }

    pub fn get(&self, handle: Handle) -> Option<&Entry> {
        self.arena.get(handle)
    }

    /// Running byte total of every entry in the chain.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    // == Iteration ==
    /// Walks entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.bytes = 0;
    }

    fn detach(&mut self, handle: Handle) -> Option<()> {
        let (prev, next) = {
            let entry = self.arena.get(handle)?;
            (entry.prev, entry.next)
        };

        match prev {
            Some(prev) => {
                if let Some(prev_entry) = self.arena.get_mut(prev) {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next) => {
                if let Some(next_entry) = self.arena.get_mut(next) {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(entry) = self.arena.get_mut(handle) {
            entry.prev = None;
            entry.next = None;
        }

        Some(())
    }

    fn attach_back(&mut self, handle: Handle) -> Option<()> {
        let old_tail = self.tail;
        let entry = self.arena.get_mut(handle)?;
        entry.prev = old_tail;
        entry.next = None;

        match old_tail {
            Some(old_tail) => {
                if let Some(tail_entry) = self.arena.get_mut(old_tail) {
                    tail_entry.next = Some(handle);
                }
            }
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        Some(())
    }

    /// Walks the chain and panics on any broken link, count, or byte total.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            assert_eq!(self.bytes, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut bytes = 0usize;
        let mut prev = None;
        let mut current = self.head;

        while let Some(handle) = current {
            assert!(seen.insert(handle), "cycle in recency chain");
            let entry = self.arena.get(handle).expect("linked entry missing");
            assert_eq!(entry.prev, prev);
            if entry.next.is_none() {
                assert_eq!(self.tail, Some(handle));
            }

            bytes += entry.cost();
            count += 1;
            assert!(count <= self.len());
            prev = Some(handle);
            current = entry.next;
        }

        assert_eq!(count, self.len());
        assert_eq!(bytes, self.bytes);
    }
}

// == Iterator ==
/// Iterator over entries from head to tail.
pub struct Iter<'a> {
    list: &'a RecencyList,
    current: Option<Handle>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.current?)?;
        self.current = entry.next;
        Some(entry)
    }
}
