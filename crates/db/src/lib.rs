//! Postgres persistence for the Turnio early-access backend.
//!
//! Pool construction, migrations, and the repository layer for the
//! `leads` table. [`PgLeadStore`] adapts the pool to the write-only
//! [`LeadStore`](turnio_core::signup::LeadStore) seam the signup
//! workflow depends on.

pub mod models;
pub mod repositories;

pub use repositories::lead_repo::PgLeadStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias used across the workspace.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
