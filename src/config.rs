//! Configuration Module
//!
//! Loads the storage byte budget from environment variables.

use std::env;

use crate::error::{Result, StorageError};

/// Default byte budget when nothing is configured (1 MiB).
pub const DEFAULT_MAX_SIZE_BYTES: usize = 1024 * 1024;

/// Storage configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Total bytes of keys plus values the storage may hold
    pub max_size_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_SIZE_BYTES` - Byte budget of the storage (default: 1048576)
    pub fn from_env() -> Self {
        Self {
            max_size_bytes: env::var("MAX_SIZE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE_BYTES),
        }
    }

    /// Rejects a zero byte budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_size_bytes == 0 {
            return Err(StorageError::InvalidCapacity(self.max_size_bytes));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_size_bytes, 1_048_576);
        assert!(config.validate().is_ok());
    }

    // Both env cases live in one test so parallel tests never race on the variable.
    #[test]
    fn test_config_from_env() {
        env::remove_var("MAX_SIZE_BYTES");
        assert_eq!(Config::from_env().max_size_bytes, DEFAULT_MAX_SIZE_BYTES);

        env::set_var("MAX_SIZE_BYTES", "4096");
        assert_eq!(Config::from_env().max_size_bytes, 4096);

        env::set_var("MAX_SIZE_BYTES", "not-a-number");
        assert_eq!(Config::from_env().max_size_bytes, DEFAULT_MAX_SIZE_BYTES);

        env::remove_var("MAX_SIZE_BYTES");
    }

    #[test]
    fn test_config_validate_zero() {
        let config = Config { max_size_bytes: 0 };
        assert_eq!(config.validate(), Err(StorageError::InvalidCapacity(0)));
    }
}
