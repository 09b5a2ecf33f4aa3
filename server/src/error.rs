//! HTTP error envelopes.
//!
//! Two shapes exist on the wire:
//! - `GET /movie` answers `{"status": "error", "message": ...}`.
//! - Every other route answers `{"error": ...}`.
//!
//! Authentication rejections use the second shape through
//! [`crate::auth::AuthError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::upstream::UpstreamError;

/// Failure surfaced by a route handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Single-movie lookup failed upstream.
    #[error("{0}")]
    Movie(UpstreamError),
    /// Any other failure, rendered as `{"error": message}`.
    #[error("{message}")]
    Plain { status: StatusCode, message: String },
}

impl ApiError {
    /// Upstream failure on a list-style route, surfaced as 500.
    #[must_use]
    pub fn upstream(error: &UpstreamError) -> Self {
        Self::internal(error.to_string())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Plain {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::Plain {
            status: StatusCode::NOT_FOUND,
            message: "Not found".to_string(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Movie(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Plain { status, .. } => *status,
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(error: UpstreamError) -> Self {
        Self::upstream(&error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Movie(error) => json!({ "status": "error", "message": error.to_string() }),
            Self::Plain { message, .. } => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
