//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
