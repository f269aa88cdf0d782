//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{config::Config, repository::UserRepository};

/// Application state shared across handlers
///
/// Owns the connection pool explicitly and is injected into the router via
/// `Router::with_state`; there is no module-level singleton. Cloning is
/// cheap (`Arc` + the pool's internal `Arc`).
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    pool: PgPool,
}

impl AppState {
    /// Create the state from loaded configuration and a connected pool
    pub fn new(config: Config, pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            pool,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a repository borrowing the pool
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }
}
