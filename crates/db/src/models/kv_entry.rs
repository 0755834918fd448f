//! Key-value snapshot rows.

use serde::Serialize;
use sqlx::FromRow;

/// Timestamps are stored as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A row from the `kv_store` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
