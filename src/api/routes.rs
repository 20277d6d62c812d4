//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, list_links_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`    - Shorten a URL (idempotent per URL)
/// - `GET    /urls`       - List all links, newest first
/// - `DELETE /urls/{id}`  - Delete a link
/// - `GET    /health`     - Store health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_links_handler))
        .route("/urls/{id}", delete(delete_link_handler))
        .route("/health", get(health_handler))
}
