//! Cross-origin resource sharing middleware.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API.
///
/// The browser frontend is served from a different origin than the API.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
