//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`ShortUrl`] - A stored id → original URL binding
//! - [`CreatedLink`] - What a successful create hands back to the caller

pub mod short_url;

pub use short_url::{CreatedLink, ShortUrl};
