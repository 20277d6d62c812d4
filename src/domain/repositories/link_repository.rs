//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt against the store's uniqueness constraints.
///
/// A taken short code or original URL is an expected outcome the service
/// recovers from, so it is reported here instead of as an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was stored.
    Created(Link),
    /// Another link already uses the generated short code.
    ShortCodeTaken,
    /// Another link already maps the same original URL.
    OriginalUrlTaken,
}

/// Repository interface for the links table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0` and `created_at = now`.
    ///
    /// Never overwrites an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by short code without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Returns every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_newest_first(&self) -> Result<Vec<Link>, AppError>;

    /// Atomically increments `clicks` for the given code and returns the
    /// updated row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the post-increment counter
    /// - `Ok(None)` if no link has this code (nothing is modified)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums `clicks` across all links. Zero for an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn total_clicks(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the round trip fails.
    async fn ping(&self) -> Result<(), AppError>;
}
