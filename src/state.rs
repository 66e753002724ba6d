//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::IdGenerator;
use crate::domain::repositories::UrlStore;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wires a [`LinkService`] from its collaborators.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn IdGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store, generator, base_url)),
        }
    }
}
