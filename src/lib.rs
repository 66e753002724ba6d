//! # URL Shortener
//!
//! A small URL shortening service built with Axum that keeps every link in
//! process memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities plus the store and id generator traits
//! - **Application Layer** ([`application`]) - Create/resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## HTTP Interface
//!
//! - `POST /` with the URL as a plain-text body returns `201` and the short URL
//! - `GET /{id}` returns `307` with `Location` set to the original URL
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -a :8080 -b http://localhost:8080
//! curl -d 'https://example.com/page' http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables and flags.
//!
//! Links live only as long as the process; there is no persistence, expiry,
//! or deletion.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, CoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::IdGenerator;
    pub use crate::domain::entities::{CreatedLink, ShortUrl};
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::{AppError, CoreError};
    pub use crate::infrastructure::persistence::MemoryUrlStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::RandomIdGenerator;
}
