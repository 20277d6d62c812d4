//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click counter is incremented atomically in the store before the
/// response is sent.
///
/// # Response
///
/// **302 Found** with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve_and_increment(&code).await?;

    debug!(short_code = %code, clicks = link.clicks, "Redirecting");

    let location = HeaderValue::from_bytes(link.original_url.as_bytes()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "id": link.id }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
