//! HTTP handlers for the users CRUD API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    models::{
        CreateUserRequest, ListUsersResponse, Pagination, UpdateUserRequest, UserMessageResponse,
        UserResponse,
    },
    state::AppState,
};

/// Parse the `:id` path segment
///
/// Extracted as a raw string so a non-integer id yields the documented 400
/// body instead of axum's path rejection.
fn parse_id(raw: &str) -> Result<i32> {
    raw.parse()
        .map_err(|_| Error::Validation("ID must be a valid number".to_string()))
}

/// List query parameters
///
/// Kept as raw strings: absent *and* non-numeric values fall back to the
/// defaults (page 1, limit 10) rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    limit: Option<String>,
}

impl ListParams {
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1)
    }

    fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }
}

/// Create a new user
///
/// Validation runs before any storage access; a duplicate email comes back
/// from the insert as a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    let (name, email) = request.validate()?;

    let user = state.users().create(name, email).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserMessageResponse::new("User created successfully", user)),
    ))
}

/// Fetch one user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>> {
    let id = parse_id(&id)?;

    let user = state.users().find_by_id(id).await?;

    Ok(Json(UserResponse { user }))
}

/// List users with offset pagination, newest first
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListUsersResponse>> {
    let page = params.page();
    let limit = params.limit();

    let (users, total) = state.users().list(page, limit).await?;

    Ok(Json(ListUsersResponse {
        users,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// Partially update a user
///
/// Only supplied fields change; `updated_at` is always refreshed.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserMessageResponse>> {
    let id = parse_id(&id)?;
    let changes = request.validate()?;

    let user = state.users().update(id, changes).await?;

    tracing::info!(user_id = user.id, "User updated");

    Ok(Json(UserMessageResponse::new(
        "User updated successfully",
        user,
    )))
}

/// Hard-delete a user, returning the removed row
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserMessageResponse>> {
    let id = parse_id(&id)?;

    let user = state.users().delete(id).await?;

    tracing::info!(user_id = user.id, "User deleted");

    Ok(Json(UserMessageResponse::new(
        "User deleted successfully",
        user,
    )))
}
