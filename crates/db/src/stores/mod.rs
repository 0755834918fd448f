//! [`KeyValueStore`](pedalstock_core::storage::KeyValueStore) adapters.
//!
//! - [`PgKeyValueStore`]: PostgreSQL `kv_store` table
//! - [`MemoryStore`]: process-local map for development and tests

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgKeyValueStore;
