//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// Length of every generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// A stored mapping from a short code to its original URL.
///
/// `id`, `original_url`, `short_code` and `created_at` never change after
/// creation. `clicks` only grows, one step per redirect.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
}
