//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Current time, RFC 3339
    pub timestamp: String,

    /// Service name
    pub service: String,
}

/// Liveness probe
///
/// Always returns 200 OK if the process is running; does not touch the
/// database.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: state.config().service.name.clone(),
    };

    (StatusCode::OK, Json(response))
}
