//! Error types for the storage backend
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Storage Error Enum ==
/// Reasons a storage request or construction can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Key and value together exceed the whole byte budget
    #[error("Entry too large: {size} bytes exceeds capacity of {max_size} bytes")]
    EntryTooLarge { size: usize, max_size: usize },

    /// Capacity must be a positive number of bytes
    #[error("Invalid capacity: {0} bytes")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the storage backend.
pub type Result<T> = std::result::Result<T, StorageError>;
