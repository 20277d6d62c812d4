//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::db_error::{is_unique_violation_on_code, is_unique_violation_on_original_url};

/// PostgreSQL repository for link storage and retrieval.
///
/// Uniqueness of `short_code` is enforced by the `links_short_code_key`
/// constraint. `original_url` is unique through the `links_original_url_key`
/// index on `md5(original_url)`, which keeps URLs of any length storable. Click
/// counting relies on a single `UPDATE ... RETURNING` statement, so
/// concurrent redirects are serialized by the row lock.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, clicks, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(link) => Ok(InsertOutcome::Created(link)),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::ShortCodeTaken),
            Err(e) if is_unique_violation_on_original_url(&e) => {
                Ok(InsertOutcome::OriginalUrlTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM links
            WHERE md5(original_url) = md5($1) AND original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list_newest_first(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE short_code = $1
            RETURNING id, original_url, short_code, clicks, created_at
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM links")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
