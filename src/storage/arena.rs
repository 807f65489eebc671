//! Entry Arena Module
//!
//! Slot storage addressed by generation-checked handles. Removing a value bumps
//! the slot's generation, so a handle to a removed entry never resolves to a
//! later occupant of the same slot.

// == Handle ==
/// Stable indirect reference to a value stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u64,
}

impl Handle {
    /// Slot position inside the arena.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    value: Option<T>,
}

// == Arena ==
/// Dense slot arena with a free list for slot reuse.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    // == Constructor ==
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    // == Insert ==
    /// Stores a value, reusing a freed slot when one is available.
    pub fn insert(&mut self, value: T) -> Handle {
        let index = match self.free_list.pop() {
            Some(index) => {
                self.slots[index].value = Some(value);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                self.slots.len() - 1
            }
        };
        self.len += 1;
        Handle {
            index,
            generation: self.slots[index].generation,
        }
    }

    // == Remove ==
    /// Takes the value out of its slot and retires the handle.
    ///
    /// Returns None if the handle is stale or the slot is already empty.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation += 1;
        self.free_list.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    // == Get ==
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    // == Contains ==
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    // == Length ==
    /// Returns the number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every value. Outstanding handles stay invalid afterwards.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation += 1;
                self.free_list.push(index);
            }
        }
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
