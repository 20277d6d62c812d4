//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// `originalUrl` is optional at the type level so that a missing field is
/// reported as a validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Only presence is checked, not format.
    #[validate(
        required(message = "originalUrl is required"),
        length(min = 1, message = "originalUrl must not be empty")
    )]
    pub original_url: Option<String>,
}
