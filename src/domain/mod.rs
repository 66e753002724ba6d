//! Domain layer containing business entities and contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Traits here are implemented by `crate::infrastructure` and
//! `crate::utils`, and consumed by [`crate::application::services`].
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`id_generator`] - Short id generation trait

pub mod entities;
pub mod id_generator;
pub mod repositories;

pub use id_generator::IdGenerator;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
