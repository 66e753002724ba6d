//! In-memory implementation of the URL store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::UrlStore;

/// Process-local store for short links backed by a sharded concurrent map.
///
/// Each key lives in exactly one shard guarded by its own lock, so writes to a
/// key are serialized against reads and writes of that key while unrelated keys
/// proceed in parallel. Entries live until the process exits.
///
/// Cloning is cheap and every clone shares the same map.
#[derive(Clone, Default)]
pub struct MemoryUrlStore {
    links: Arc<DashMap<String, String>>,
}

impl MemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn save(&self, id: &str, url: &str) {
        if self.links.insert(id.to_string(), url.to_string()).is_some() {
            debug!("Overwrote existing binding for {}", id);
        }
    }

    async fn get(&self, id: &str) -> Option<String> {
        self.links.get(id).map(|entry| entry.value().clone())
    }

    async fn count(&self) -> usize {
        self.links.len()
    }
}
