//! Data models for the users API

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Email format: `local@domain.tld`, no whitespace or extra `@`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// User row as persisted in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request
///
/// Both fields are optional at the serde level so that missing fields reach
/// the validator and produce the documented 400 body instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Validate the create request, returning the accepted field values
    ///
    /// Empty strings count as missing.
    pub fn validate(&self) -> Result<(&str, &str)> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let email = self.email.as_deref().filter(|s| !s.is_empty());

        let (Some(name), Some(email)) = (name, email) else {
            return Err(Error::Validation(
                "Name and email are required fields".to_string(),
            ));
        };

        if !EMAIL_PATTERN.is_match(email) {
            return Err(Error::Validation("Email has an invalid format".to_string()));
        }

        Ok((name, email))
    }
}

/// Update user request (partial: only supplied fields change)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Validate the update request and convert it into repository changes
    ///
    /// Empty strings count as absent, so `{"name":""}` supplies nothing.
    pub fn validate(&self) -> Result<UserChanges> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let email = self.email.as_deref().filter(|s| !s.is_empty());

        if name.is_none() && email.is_none() {
            return Err(Error::Validation(
                "At least one field (name or email) must be provided".to_string(),
            ));
        }

        if let Some(email) = email {
            if !EMAIL_PATTERN.is_match(email) {
                return Err(Error::Validation("Invalid email format".to_string()));
            }
        }

        Ok(UserChanges {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        })
    }
}

/// Validated partial-update fields
///
/// Passed to the repository, which binds each field to a fixed column
/// placeholder; `None` leaves the column untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Pagination metadata returned alongside list results
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    /// Compute pagination metadata for a page of results
    ///
    /// `pages` is the ceiling of `total / limit`; a non-positive limit
    /// yields zero pages rather than dividing by it. The limit is unbounded,
    /// so the ceiling is computed without an intermediate sum that could
    /// overflow on `limit = i64::MAX`.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if limit > 0 {
            total / limit + i64::from(total % limit != 0)
        } else {
            0
        };

        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// Body for get: `{user}`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Body for create/update/delete: `{message, user}`
#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: User,
}

impl UserMessageResponse {
    pub fn new(message: impl Into<String>, user: User) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}

/// Body for list: `{users, pagination}`
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub pagination: Pagination,
}
