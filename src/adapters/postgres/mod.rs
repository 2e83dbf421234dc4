//! PostgreSQL adapters - Database implementations for the ledger repository ports.
//!
//! - `PostgresClientRepository` - Client rows and the client cascade delete
//! - `PostgresLogRepository` - Log rows joined with client names
//! - `PostgresCycleRepository` - Cycle rows and the paid-flag bookkeeping

mod client_repository;
mod cycle_repository;
mod log_repository;

pub use client_repository::PostgresClientRepository;
pub use cycle_repository::PostgresCycleRepository;
pub use log_repository::PostgresLogRepository;

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Creates the ledger tables from the bundled `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Reads one column, mapping decode failures to a database error.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to read column {}", name), e))
}
