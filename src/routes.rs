//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};

use crate::{error::Error, handlers, state::AppState};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .fallback(not_found)
        .with_state(state)
}

/// JSON 404 for unmatched routes
async fn not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}
