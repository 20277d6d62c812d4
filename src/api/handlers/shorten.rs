//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{ALREADY_SHORTENED, LinkResponse};
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// - **201 Created** with the new record
/// - **200 OK** with the existing record and
///   `"message": "URL already shortened"`
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortCode": "aB3dE9",
///   "clicks": 0,
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `originalUrl` is missing or empty, or if the
/// body is absent, not JSON, or has a non-string `originalUrl`.
/// Returns 500 on store errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.original_url.unwrap_or_default();

    let outcome = state.link_service.create(&original_url).await?;

    if outcome.created {
        Ok((StatusCode::CREATED, Json(outcome.link.into())))
    } else {
        let body = LinkResponse::from(outcome.link).with_message(ALREADY_SHORTENED);
        Ok((StatusCode::OK, Json(body)))
    }
}
