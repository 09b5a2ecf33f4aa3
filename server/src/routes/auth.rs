//! Login and profile handlers.

use axum::{Extension, Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::AppState;
use crate::auth::{AuthenticatedUser, issue_token};
use crate::error::ApiError;

/// Subject used when the login body names no user.
pub const DEFAULT_USERNAME: &str = "student";

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginRequest {
    /// Parse a login body leniently: anything that is not a JSON object with
    /// a string `username` counts as an empty request.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The subject to issue a token for.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_USERNAME,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /auth/login`: issue a one-hour token for the given username.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = LoginRequest::from_body(&body);
    let subject = request.subject();

    let token = issue_token(subject, &state.jwt).map_err(|e| {
        tracing::error!(error = %e, "token issuance failed");
        ApiError::internal(e.to_string())
    })?;
    tracing::info!(user = subject, "issued token");

    Ok(Json(LoginResponse { token }))
}

/// `GET /auth/profile`: echo the identity resolved by the auth middleware.
pub async fn profile(Extension(user): Extension<AuthenticatedUser>) -> Json<Value> {
    Json(json!({ "status": "authorized", "user": user.subject() }))
}
