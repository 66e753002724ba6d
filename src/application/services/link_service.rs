//! Link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::IdGenerator;
use crate::domain::entities::{CreatedLink, ShortUrl};
use crate::domain::repositories::UrlStore;
use crate::error::CoreError;

/// Service for creating and resolving short links.
///
/// Owns the orchestration between the id generator and the store. Both are
/// injected, so the in-memory store can be replaced without touching this code.
pub struct LinkService {
    store: Arc<dyn UrlStore>,
    generator: Arc<dyn IdGenerator>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the prefix of every returned short URL; a trailing `/` is
    /// dropped so the result always has exactly one separator.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn IdGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            store,
            generator,
            base_url,
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL is stored verbatim. A freshly generated id that happens to match
    /// an existing one replaces it (last write wins); there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `original_url` is empty; nothing
    /// is stored in that case.
    ///
    /// Returns [`CoreError::RandomSource`] if id generation fails.
    pub async fn create(&self, original_url: &str) -> Result<CreatedLink, CoreError> {
        if original_url.is_empty() {
            return Err(CoreError::InvalidInput("empty URL".to_string()));
        }

        let link = ShortUrl::new(self.generator.generate()?, original_url);

        self.store.save(&link.id, &link.original_url).await;
        info!("Created short link {} -> {}", link.id, link.original_url);

        let short_url = self.get_short_url(&link.id);

        Ok(CreatedLink {
            id: link.id,
            short_url,
        })
    }

    /// Resolves `id` to the URL it is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no entry is bound to `id`.
    pub async fn resolve(&self, id: &str) -> Result<String, CoreError> {
        match self.store.get(id).await {
            Some(url) => Ok(url),
            None => {
                debug!("No short link bound to {}", id);
                Err(CoreError::NotFound(id.to_string()))
            }
        }
    }

    /// Constructs the full short URL for an id.
    pub fn get_short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Number of links currently stored.
    pub async fn link_count(&self) -> usize {
        self.store.count().await
    }
}
