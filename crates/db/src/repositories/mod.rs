//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take the
//! [`KeyValueStore`] as their first argument. Loads never fail: absence,
//! decode errors and storage errors all degrade to a default. Saves are best
//! effort and only log on failure.

pub mod inventory_repo;
pub mod template_repo;

pub use inventory_repo::InventoryRepo;
pub use template_repo::TemplateRepo;

use pedalstock_core::storage::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fetch and decode the JSON value under `key`.
///
/// Blank text counts as absent.
pub(crate) async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Parse {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Encode `value` as JSON and store it under `key`.
pub(crate) async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &text).await
}
