//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::dto::link::{DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// No pagination; the full set is returned.
///
/// # Errors
///
/// Returns 500 on store errors.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Behavior
///
/// Deleting an id that does not exist succeeds. An id that is not a number
/// cannot match any link and is treated the same way.
///
/// # Errors
///
/// Returns 500 on store errors.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    match id.parse::<i64>() {
        Ok(id) => state.link_service.delete(id).await?,
        Err(_) => debug!(%id, "Delete requested for malformed id"),
    }

    Ok(Json(DeleteResponse { message: "Deleted" }))
}
