//! User repository: parameterized statements against the `users` table
//!
//! Every statement binds untrusted values through placeholders; no user
//! input is ever interpolated into SQL text. Partial update uses fixed,
//! enumerated column bindings with `COALESCE`, so unsupplied fields keep
//! their stored values without any dynamic statement assembly.

use sqlx::PgPool;

use crate::{
    error::{Error, Result},
    models::{User, UserChanges},
};

/// Rows to skip for a page
///
/// Saturating: `page` and `limit` come from the client unclamped, and a
/// huge page times a huge limit must not overflow. A saturated offset just
/// lands past the end of the table and yields an empty page.
fn list_offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Storage access for the `users` table
///
/// Borrows the pool from `AppState`; construction is free, one instance per
/// request is fine.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a row and return it with the generated id and timestamps
    ///
    /// A duplicate email surfaces as `Error::Conflict` via the unique
    /// constraint, never as a crash.
    pub async fn create(&self, name: &str, email: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Fetch a row by id
    pub async fn find_by_id(&self, id: i32) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// List rows ordered by creation time, newest first
    ///
    /// Returns the page of rows and the total row count. The limit is
    /// passed through unclamped.
    pub async fn list(&self, page: i64, limit: i64) -> Result<(Vec<User>, i64)> {
        let offset = list_offset(page, limit);

        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok((users, total))
    }

    /// Apply a partial update and return the updated row
    ///
    /// A single statement: unsupplied fields coalesce to their stored
    /// values, `updated_at` is always refreshed, and a missing id shows up
    /// as no returned row rather than a separate existence check.
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users \
             SET name = COALESCE($1, name), \
                 email = COALESCE($2, email), \
                 updated_at = NOW() \
             WHERE id = $3 \
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(changes.name)
        .bind(changes.email)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Hard-delete a row, returning its prior values
    pub async fn delete(&self, id: i32) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = $1 \
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::db;

    #[test]
    fn test_list_offset_skips_prior_pages() {
        assert_eq!(list_offset(1, 10), 0);
        assert_eq!(list_offset(2, 5), 5);
        assert_eq!(list_offset(3, 10), 20);
    }

    #[test]
    fn test_list_offset_saturates_on_huge_page() {
        assert_eq!(list_offset(i64::MAX, 10), i64::MAX);
    }

    #[test]
    fn test_list_offset_huge_limit_first_page() {
        assert_eq!(list_offset(1, i64::MAX), 0);
    }

    // The tests below run against a per-test database provisioned by
    // `#[sqlx::test]` from `DATABASE_URL`.

    #[sqlx::test]
    async fn test_create_assigns_id_and_equal_timestamps(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        let user = repo.create("Ana", "ana@example.com").await.unwrap();

        assert!(user.id >= 1);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[sqlx::test]
    async fn test_duplicate_email_conflicts_without_new_row(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        repo.create("Ana", "ana@example.com").await.unwrap();
        let err = repo.create("Impostor", "ana@example.com").await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        let (users, total) = repo.list(1, 10).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ana");
    }

    #[sqlx::test]
    async fn test_find_missing_id_is_not_found(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        let err = repo.find_by_id(999999).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[sqlx::test]
    async fn test_update_name_only_keeps_email_and_advances_updated_at(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        let created = repo.create("Ana", "ana@example.com").await.unwrap();

        // NOW() has microsecond resolution; give the clock room to move
        tokio::time::sleep(Duration::from_millis(20)).await;

        let updated = repo
            .update(
                created.id,
                UserChanges {
                    name: Some("Bea".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Bea");
        assert_eq!(updated.email, "ana@example.com");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[sqlx::test]
    async fn test_update_missing_id_is_not_found(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        let err = repo
            .update(
                999999,
                UserChanges {
                    name: Some("Bea".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[sqlx::test]
    async fn test_update_duplicate_email_conflicts(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        repo.create("Ana", "ana@example.com").await.unwrap();
        let bob = repo.create("Bob", "bob@example.com").await.unwrap();

        let err = repo
            .update(
                bob.id,
                UserChanges {
                    name: None,
                    email: Some("ana@example.com".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[sqlx::test]
    async fn test_delete_then_find_is_not_found(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        let created = repo.create("Ana", "ana@example.com").await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);
        assert_eq!(deleted.email, "ana@example.com");

        let err = repo.find_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[sqlx::test]
    async fn test_list_second_page_of_twelve(pool: PgPool) {
        db::init_schema(&pool).await.unwrap();
        let repo = UserRepository::new(&pool);

        for i in 0..12 {
            repo.create(&format!("User {i}"), &format!("user{i}@example.com"))
                .await
                .unwrap();
        }

        let (users, total) = repo.list(2, 5).await.unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(total, 12);
        // Newest first
        assert!(users
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));

        let (last_page, _) = repo.list(3, 5).await.unwrap();
        assert_eq!(last_page.len(), 2);

        let (past_the_end, total) = repo.list(4, 5).await.unwrap();
        assert!(past_the_end.is_empty());
        assert_eq!(total, 12);
    }
}
