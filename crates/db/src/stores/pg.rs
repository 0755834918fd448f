//! PostgreSQL-backed key-value store over the `kv_store` table.

use async_trait::async_trait;
use pedalstock_core::storage::{KeyValueStore, StorageError};
use sqlx::PgPool;

use crate::models::kv_entry::KvEntry;

/// Column list for `kv_store` queries.
const COLUMNS: &str = "key, value, created_at, updated_at";

/// Stores each snapshot as one row keyed by the storage key.
#[derive(Debug, Clone)]
pub struct PgKeyValueStore {
    pool: PgPool,
}

impl PgKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full row for `key`, including timestamps.
    pub async fn entry(&self, key: &str) -> Result<Option<KvEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kv_store WHERE key = $1");
        sqlx::query_as::<_, KvEntry>(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entry = self
            .entry(key)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entry.map(|row| row.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET \
                 value = EXCLUDED.value, \
                 updated_at = NOW()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
