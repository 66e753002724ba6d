//! Infrastructure layer.
//!
//! Concrete implementations of the storage traits defined by the domain layer.
//!
//! - [`persistence`] - Short link stores

pub mod persistence;
