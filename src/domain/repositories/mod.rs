//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! - [`UrlStore`] - Short id → original URL association

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
