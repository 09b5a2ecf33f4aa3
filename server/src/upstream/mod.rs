//! Upstream movie-metadata provider.
//!
//! Two read-only calls are exposed through [`MovieSource`]: fetch one movie by
//! id, and fetch one page of popular movies. Bodies are returned as raw JSON;
//! this server holds no copy of the records and enforces nothing on them.
//!
//! # Invariants
//! - Every call is a single attempt: no retries, no caching.
//! - Error messages never contain the API key.

mod client;

use std::fmt;
use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::Value;

pub use client::TmdbClient;

/// Movie identifier as given by the caller.
///
/// Kept as text so both numeric ids and whatever else a caller passes reach
/// the upstream unchanged; the upstream decides what is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieId(String);

impl MovieId {
    /// Id used when the caller does not supply one.
    pub const DEFAULT: &'static str = "550";

    /// Build an id from optional caller input. Absent or empty input falls
    /// back to [`MovieId::DEFAULT`].
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure talking to the upstream provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The request did not complete within the configured timeout.
    #[error("upstream request timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },
    /// Connection, DNS, TLS, or body transfer failure.
    #[error("upstream request failed: {0}")]
    Network(String),
    /// The upstream answered with a non-success status.
    #[error("{status} {reason} for url: {url}")]
    Status {
        status: u16,
        reason: String,
        /// Request URL with its query string removed.
        url: String,
    },
    /// The response body was not valid JSON.
    #[error("upstream returned malformed JSON: {0}")]
    Decode(String),
    /// The HTTP client could not be constructed.
    #[error("failed to build upstream HTTP client: {0}")]
    ClientBuild(String),
    /// The configured base URL cannot have path segments appended.
    #[error("upstream base URL cannot be used as a base: {0}")]
    InvalidBaseUrl(String),
}

/// Source of movie metadata.
///
/// [`TmdbClient`] is the production implementation; tests substitute a stub.
pub trait MovieSource: Send + Sync + 'static {
    /// Fetch a single movie record.
    fn fetch_movie<'a>(&'a self, id: &'a MovieId) -> BoxFuture<'a, Result<Value, UpstreamError>>;

    /// Fetch one page of popular movies. The document carries a `results` list.
    fn fetch_popular_movies(&self) -> BoxFuture<'_, Result<Value, UpstreamError>>;
}
