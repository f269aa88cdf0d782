//! User management microservice
//!
//! Startup order: configuration, tracing, connection pool, idempotent
//! schema creation, router, server. On SIGTERM/SIGINT the server drains
//! in-flight requests and the pool is closed before exit.

use user_service::{
    config::Config, db, error::Result, observability::init_tracing, routes, server::Server,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config)?;

    tracing::info!("Starting {}", config.service.name);

    let pool = db::create_pool(&config.database).await?;
    db::init_schema(&pool).await?;

    let state = AppState::new(config.clone(), pool);
    let app = routes::router(state.clone());

    Server::new(config).serve(app).await?;

    // Drain the connection pool before process exit
    state.pool().close().await;
    tracing::info!("Connection pool closed");

    Ok(())
}
