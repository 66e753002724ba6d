//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short id generation

pub mod code_generator;
