//! Short id generation.
//!
//! Provides cryptographically secure random ids encoded as URL-safe base64.

use crate::domain::IdGenerator;
use crate::error::CoreError;
use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 6;

/// Length of an encoded id (6 bytes → 8 base64 characters, no padding).
pub const ID_LENGTH: usize = 8;

/// Generates a cryptographically secure random short id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character id drawn from `A-Z a-z 0-9 - _`.
///
/// # Errors
///
/// Returns [`CoreError::RandomSource`] if the system random number generator
/// fails.
///
/// # Examples
///
/// ```ignore
/// let id = generate_id()?;
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_id() -> Result<String, CoreError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| CoreError::RandomSource(e.to_string()))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// [`IdGenerator`] backed by the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, CoreError> {
        generate_id()
    }
}
