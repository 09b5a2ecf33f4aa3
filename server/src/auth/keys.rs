//! Signing key material for session tokens.
//!
//! # Pre-conditions
//! - The shared secret must be non-empty.
//!
//! # Post-conditions
//! - `JwtConfig` instances are immutable once created.
//!
//! # Invariants
//! - The same secret signs and verifies (HS256); there is no rotation.

use std::fmt;

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Error returned when JWT configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    /// The HS256 secret is empty.
    #[error("HS256 secret must not be empty")]
    EmptySecret,
}

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtConfig {
    /// Create a new HS256 JWT configuration.
    ///
    /// # Errors
    /// Returns `JwtConfigError::EmptySecret` if the secret is empty.
    pub fn new_hs256(secret: &[u8]) -> Result<Self, JwtConfigError> {
        if secret.is_empty() {
            return Err(JwtConfigError::EmptySecret);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    pub(crate) const fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) const fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}
