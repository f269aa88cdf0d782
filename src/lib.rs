//! # user-service
//!
//! Minimal user management microservice: JSON CRUD over a single PostgreSQL
//! `users` table.
//!
//! - **HTTP**: axum router with health check, CRUD routes, and a JSON 404
//!   fallback
//! - **Storage**: sqlx connection pool, parameterized statements only,
//!   idempotent schema creation at startup
//! - **Errors**: typed taxonomy mapped deterministically to status codes
//!   (400/404/409/500) with `{error}` bodies
//! - **Graceful shutdown**: SIGTERM/SIGINT drain in-flight requests, then
//!   the pool is closed
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_service::{config::Config, db, observability::init_tracing};
//! use user_service::{routes, server::Server, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> user_service::error::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let pool = db::create_pool(&config.database).await?;
//!     db::init_schema(&pool).await?;
//!
//!     let state = AppState::new(config.clone(), pool);
//!     let app = routes::router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;
