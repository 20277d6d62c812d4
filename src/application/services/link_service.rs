//! Link registry service: creation, listing, redirect resolution and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_well_formed};
use serde_json::json;
use tracing::{debug, info, warn};

/// Maximum number of generated codes tried before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Outcome of [`LinkService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub link: Link,
    /// `false` when the URL was already shortened and the existing link is returned.
    pub created: bool,
}

/// Service owning the short link registry.
///
/// Handles deduplication by original URL, random code assignment with
/// collision retry, and atomic click counting on redirect.
pub struct LinkService<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Shortens `original_url`, or returns the existing link for it.
    ///
    /// # Deduplication
    ///
    /// If a link for the same URL exists it is returned unchanged with
    /// `created = false`. When two callers race on the same URL, the store's
    /// uniqueness constraint makes one of them lose the insert; the loser
    /// re-reads and returns the winner's link.
    ///
    /// # Code Generation
    ///
    /// Generates a random 6-character alphanumeric code and inserts it. On a
    /// code collision a new code is drawn, up to [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty.
    /// Returns [`AppError::Conflict`] if every generated code collided.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, original_url: &str) -> Result<CreatedLink, AppError> {
        // Presence is judged on the trimmed value; the URL is stored as sent.
        if original_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "originalUrl is required",
                json!({ "field": "originalUrl" }),
            ));
        }

        if let Some(existing) = self.find_existing(original_url).await? {
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                original_url: original_url.to_string(),
                short_code: generate_code(),
            };

            match self.link_repository.insert(new_link).await? {
                InsertOutcome::Created(link) => {
                    info!(id = link.id, short_code = %link.short_code, "Link created");
                    return Ok(CreatedLink {
                        link,
                        created: true,
                    });
                }
                InsertOutcome::ShortCodeTaken => {
                    warn!(attempt, "Short code collision, retrying");
                }
                InsertOutcome::OriginalUrlTaken => {
                    debug!("Concurrent create for the same URL, returning existing link");
                    return self.find_existing(original_url).await?.ok_or_else(|| {
                        AppError::internal(
                            "Link vanished after unique violation",
                            json!({ "original_url": original_url }),
                        )
                    });
                }
            }
        }

        Err(AppError::conflict(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Returns all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_newest_first().await
    }

    /// Resolves a short code for redirect and counts the click.
    ///
    /// The increment is a single atomic store operation, so concurrent
    /// redirects never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_and_increment(&self, short_code: &str) -> Result<Link, AppError> {
        // Nothing else can be stored, so skip the round trip.
        if !is_well_formed(short_code) {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": short_code }),
            ));
        }

        self.link_repository
            .increment_clicks(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": short_code }))
            })
    }

    /// Looks up a link by code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_code(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": short_code }))
            })
    }

    /// Deletes a link by id. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.link_repository.delete(id).await? {
            info!(id, "Link deleted");
        } else {
            debug!(id, "Delete requested for unknown link");
        }

        Ok(())
    }

    /// Returns `(links, total clicks)` across the registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        let count = self.link_repository.count().await?;
        let clicks = self.link_repository.total_clicks().await?;

        Ok((count, clicks))
    }

    /// Returns true if the backing store answers.
    pub async fn health(&self) -> bool {
        match self.link_repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        }
    }

    async fn find_existing(&self, original_url: &str) -> Result<Option<CreatedLink>, AppError> {
        let existing = self
            .link_repository
            .find_by_original_url(original_url)
            .await?;

        if let Some(link) = &existing {
            debug!(short_code = %link.short_code, "URL already shortened");
        }

        Ok(existing.map(|link| CreatedLink {
            link,
            created: false,
        }))
    }
}
