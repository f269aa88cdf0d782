//! Database connection pool management and schema initialization

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{
    config::DatabaseConfig,
    error::{Error, Result},
};

/// Idempotent schema for the single `users` table
///
/// Safe to run on every startup.
const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id         SERIAL PRIMARY KEY,
    name       VARCHAR(255) NOT NULL,
    email      VARCHAR(255) UNIQUE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Create the PostgreSQL connection pool
///
/// The pool is the sole shared resource in the process; it is created once
/// at startup and handed to the router via `AppState`. A failed connection
/// surfaces immediately as an error, there is no retry loop.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connect(&config.url())
        .await
        .map_err(|e| {
            Error::Internal(format!(
                "Failed to connect to database at '{}': {}",
                config.safe_url(),
                e
            ))
        })?;

    tracing::info!(
        "Database connection pool created: max={}, min={}",
        config.max_connections,
        config.min_connections
    );

    Ok(pool)
}

/// Create the `users` table if it does not exist
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent() {
        assert!(CREATE_USERS_TABLE.starts_with("CREATE TABLE IF NOT EXISTS users"));
    }

    #[test]
    fn test_schema_columns() {
        for column in ["id", "name", "email", "created_at", "updated_at"] {
            assert!(CREATE_USERS_TABLE.contains(column), "missing column {column}");
        }
        assert!(CREATE_USERS_TABLE.contains("UNIQUE"));
    }
}
