//! Bearer-token gate for protected routes.
//!
//! Each request is evaluated once: `Unauthenticated -> {Authenticated, Rejected}`.
//! On success the subject is attached to the request's extensions as
//! [`AuthenticatedUser`] for that request only; nothing survives across
//! requests.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::{JwtConfig, jwt};

const BEARER_PREFIX: &str = "Bearer ";

/// Identity resolved from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl AuthenticatedUser {
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.0
    }
}

/// Why a request was rejected by the gate.
///
/// The messages are fixed; signature and expiry details are never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was present.
    #[error("Missing token")]
    MissingToken,
    /// The token failed signature, format, or expiry checks.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The value must start with the literal `Bearer ` and be followed by a
/// non-blank token; the token is the first whitespace-separated word.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .and_then(|rest| rest.split_whitespace().next())
        .ok_or(AuthError::MissingToken)
}

/// Resolve the caller's identity from request headers.
pub fn authenticate(
    headers: &HeaderMap,
    config: &JwtConfig,
) -> Result<AuthenticatedUser, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = bearer_token(header)?;

    jwt::verify_token(token, config)
        .map(AuthenticatedUser)
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            AuthError::InvalidOrExpiredToken
        })
}

/// Middleware applied in front of protected handlers.
///
/// Handlers behind it read the identity with `Extension<AuthenticatedUser>`.
pub async fn require_auth(
    State(config): State<Arc<JwtConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate(request.headers(), &config)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
