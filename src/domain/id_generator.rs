//! Short id generation contract.

use crate::error::CoreError;

/// Produces tokens used as short link path segments.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::RandomIdGenerator`] - OS entropy, base64url encoded
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Generates a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RandomSource`] if no random bytes are available.
    fn generate(&self) -> Result<String, CoreError>;
}
