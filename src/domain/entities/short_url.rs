//! Short URL entity representing an id → original URL binding.

/// A stored short link.
///
/// The pair is immutable once created; `original_url` is kept exactly as
/// submitted, with no validation or normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_url: original_url.into(),
        }
    }
}

/// Result of a successful create: the id and the full short URL handed back
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub id: String,
    pub short_url: String,
}
