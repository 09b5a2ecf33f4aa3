//! reqwest-backed [`MovieSource`] talking to a TMDB-compatible API.

use std::fmt;
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::{MovieId, MovieSource, UpstreamError};
use crate::config::ServerConfig;

/// HTTP client for the upstream movie API.
///
/// Requests are `GET {base_url}/movie/{id}` and `GET {base_url}/movie/popular`,
/// each carrying the API key as the `api_key` query parameter.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Build a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot carry path segments or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
            timeout,
        })
    }

    /// Build a client from the upstream section of the server configuration.
    pub fn from_config(config: &ServerConfig) -> Result<Self, UpstreamError> {
        Self::new(
            config.upstream_base_url.clone(),
            config.api_key.clone(),
            config.upstream_timeout,
        )
    }

    /// `{base_url}/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, url: Url) -> Result<Value, UpstreamError> {
        tracing::debug!(url = %url, "fetching from upstream");

        let response = self
            .http
            .get(url.clone())
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    /// Classify a reqwest failure, dropping the URL so the API key in the
    /// query string never reaches an error message.
    fn map_transport_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout {
                after: self.timeout,
            }
        } else {
            UpstreamError::Network(error.without_url().to_string())
        }
    }
}

impl MovieSource for TmdbClient {
    fn fetch_movie<'a>(&'a self, id: &'a MovieId) -> BoxFuture<'a, Result<Value, UpstreamError>> {
        Box::pin(self.get_json(self.endpoint(&["movie", id.as_str()])))
    }

    fn fetch_popular_movies(&self) -> BoxFuture<'_, Result<Value, UpstreamError>> {
        Box::pin(self.get_json(self.endpoint(&["movie", "popular"])))
    }
}
