//! DTOs for link records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Message attached when a shorten request hits an existing link.
pub const ALREADY_SHORTENED: &str = "URL already shortened";

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl LinkResponse {
    /// Attaches an informational message to the record.
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            created_at: link.created_at,
            message: None,
        }
    }
}

/// Confirmation returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            7,
            "https://example.com".to_string(),
            "aB3dE9".to_string(),
            2,
            Utc::now(),
        );

        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["originalUrl"], "https://example.com");
        assert_eq!(json["shortCode"], "aB3dE9");
        assert_eq!(json["clicks"], 2);
        assert!(json["createdAt"].is_string());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_link_response_with_message() {
        let link = Link::new(1, "https://a.com".to_string(), "abcdef".to_string(), 0, Utc::now());

        let json = serde_json::to_value(LinkResponse::from(link).with_message(ALREADY_SHORTENED))
            .unwrap();

        assert_eq!(json["message"], "URL already shortened");
    }
}
