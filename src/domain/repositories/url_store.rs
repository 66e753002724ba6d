//! Store trait for short link data access.

use async_trait::async_trait;

/// Associative store from short id to original URL.
///
/// # Concurrency
///
/// Implementations must be safe to call from any number of request tasks at
/// once. Writes to a key are serialized against other writes and reads of the
/// same key, and a `get` issued after an observed `save` of the same id sees
/// the saved value. No ordering is promised across different keys.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlStore`] - In-process sharded map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/service_concurrency.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Binds `id` to `url`.
    ///
    /// Overwrites any existing value for `id` (last write wins); uniqueness is
    /// left to the id generator.
    async fn save(&self, id: &str, url: &str);

    /// Looks up the URL bound to `id`.
    ///
    /// Returns an owned copy; callers never see references into the store.
    async fn get(&self, id: &str) -> Option<String>;

    /// Number of bound ids.
    async fn count(&self) -> usize;
}
