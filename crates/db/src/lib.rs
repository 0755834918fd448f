//! Persistence for the pedal parts inventory.
//!
//! Key-value adapters ([`stores`]), the load/save policy around them
//! ([`repositories`]) and the [`session::Session`] controller that owns the
//! single in-memory copy of inventory and templates.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod session;
pub mod stores;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
