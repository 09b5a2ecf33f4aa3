//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying `{sub, exp}`.
//!
//! # Pre-conditions
//! - The subject must be a non-empty string.
//!
//! # Post-conditions
//! - Issued tokens expire [`TOKEN_LIFETIME`] after issuance.
//! - Verification returns the `sub` claim only if the signature matches and
//!   the current time is strictly before `exp`.
//!
//! # Invariants
//! - Verification is stateless; nothing is persisted server-side.
//! - No leeway is applied to expiry.

use std::time::Duration;

use jsonwebtoken::{Algorithm, Header, Validation, decode, encode, get_current_timestamp};
use serde::{Deserialize, Serialize};

use super::JwtConfig;

/// How long an issued token stays valid.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject claim containing the user identifier.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: u64,
}

/// Error returned when issuing or verifying a JWT fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtError {
    /// The JWT signature is invalid.
    #[error("invalid JWT signature")]
    InvalidSignature,
    /// The JWT has expired.
    #[error("JWT has expired")]
    TokenExpired,
    /// The JWT is malformed or cannot be parsed.
    #[error("malformed JWT")]
    MalformedToken,
    /// The 'sub' claim is missing or empty.
    #[error("missing 'sub' claim in JWT")]
    MissingSubClaim,
    /// Signing the claims failed.
    #[error("failed to sign JWT: {0}")]
    Signing(String),
}

/// Issue a token for `subject`, valid for [`TOKEN_LIFETIME`] from now.
///
/// # Errors
/// Returns `JwtError::MissingSubClaim` for an empty subject, or
/// `JwtError::Signing` if encoding fails.
pub fn issue_token(subject: &str, config: &JwtConfig) -> Result<String, JwtError> {
    issue_token_at(subject, get_current_timestamp(), config)
}

/// Issue a token as if the current time were `issued_at` (Unix seconds).
pub fn issue_token_at(
    subject: &str,
    issued_at: u64,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    if subject.is_empty() {
        return Err(JwtError::MissingSubClaim);
    }

    let claims = Claims {
        sub: subject.to_string(),
        exp: issued_at.saturating_add(TOKEN_LIFETIME.as_secs()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        config.encoding_key(),
    )
    .map_err(|e| JwtError::Signing(e.to_string()))
}

/// Verifies a JWT and extracts the user ID from the 'sub' claim.
///
/// # Errors
/// Returns `JwtError` if verification fails for any reason.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<String, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data =
        decode::<Claims>(token, config.decoding_key(), &validation).map_err(map_jwt_error)?;

    // The library still accepts `exp == now`; a token is only valid before it.
    if token_data.claims.exp <= get_current_timestamp() {
        return Err(JwtError::TokenExpired);
    }

    let user_id = token_data.claims.sub;
    if user_id.is_empty() {
        return Err(JwtError::MissingSubClaim);
    }

    Ok(user_id)
}

/// Maps jsonwebtoken errors to our `JwtError` type.
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> JwtError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::MalformedToken,
    }
}
