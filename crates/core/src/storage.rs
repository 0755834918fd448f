//! Key-value persistence contract consumed by the inventory and template
//! repositories.
//!
//! Adapters normalize whatever their backend returns into "text present" or
//! "absent" before it crosses this boundary.

use async_trait::async_trait;

/// Storage key for the inventory snapshot.
pub const INVENTORY_KEY: &str = "pedal-inventory";

/// Storage key for the template registry snapshot.
pub const TEMPLATES_KEY: &str = "pedal-templates";

/// Failures at the storage boundary. None of these reach the user: loads
/// fall back to defaults and saves are best effort.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored value under '{key}' could not be decoded: {reason}")]
    Parse { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A string-keyed store of text blobs. Each `set` overwrites the full value;
/// concurrent writers resolve as last-writer-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct() {
        assert_ne!(INVENTORY_KEY, TEMPLATES_KEY);
    }

    #[test]
    fn display_parse_error() {
        let err = StorageError::Parse {
            key: INVENTORY_KEY.to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stored value under 'pedal-inventory' could not be decoded: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_write_error() {
        let err = StorageError::Write {
            key: TEMPLATES_KEY.to_string(),
            reason: "connection reset".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write 'pedal-templates': connection reset");
    }
}
