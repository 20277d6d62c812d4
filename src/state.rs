//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// State shared by all request handlers.
///
/// The store handle is chosen at startup and passed in explicitly; handlers
/// reach it only through the service.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
}

impl AppState {
    /// Builds the state around a link store.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}
