//! Store implementations.
//!
//! - [`MemoryUrlStore`] - Process-local, concurrency-safe short link storage

pub mod memory_url_store;

pub use memory_url_store::MemoryUrlStore;
