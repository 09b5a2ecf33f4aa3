//! Server configuration module.
//!
//! This module provides configuration loading for the movie server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `MOVIES_API_KEY`: API key for the upstream movie provider (required)
//! - `MOVIES_JWT_SECRET`: HS256 secret used to sign and verify tokens (required)
//! - `MOVIES_LISTEN_PORT`: Port to listen on (default: `5050`)
//! - `MOVIES_UPSTREAM_BASE_URL`: Upstream API root (default: `https://api.themoviedb.org/3`)
//! - `MOVIES_IMAGE_BASE_URL`: Prefix for poster paths (default: `https://image.tmdb.org/t/p/w500`)
//! - `MOVIES_UPSTREAM_TIMEOUT_SECS`: Upstream request timeout in seconds (default: `10`)
//! - `MOVIES_LOG_FILE`: Append-only log file (default: `movie_app.log`, empty disables it)
//!
//! # Invariants
//!
//! - `api_key` and `jwt_secret` are never empty
//! - `upstream_base_url` is an absolute `http` or `https` URL
//! - `upstream_timeout` is never zero

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

const API_KEY_VAR: &str = "MOVIES_API_KEY";
const JWT_SECRET_VAR: &str = "MOVIES_JWT_SECRET";
const LISTEN_PORT_VAR: &str = "MOVIES_LISTEN_PORT";
const UPSTREAM_BASE_URL_VAR: &str = "MOVIES_UPSTREAM_BASE_URL";
const IMAGE_BASE_URL_VAR: &str = "MOVIES_IMAGE_BASE_URL";
const UPSTREAM_TIMEOUT_VAR: &str = "MOVIES_UPSTREAM_TIMEOUT_SECS";
const LOG_FILE_VAR: &str = "MOVIES_LOG_FILE";

/// Server configuration.
///
/// Built once at process start and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// API key attached to every upstream request.
    pub api_key: String,
    /// Shared secret for HS256 token signing and verification.
    pub jwt_secret: Vec<u8>,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
    /// Root of the upstream movie API, e.g. `https://api.themoviedb.org/3`.
    pub upstream_base_url: Url,
    /// Prefix joined with each movie's `poster_path` on the summary page.
    pub image_base_url: String,
    /// Bound on every outbound upstream call.
    pub upstream_timeout: Duration,
    /// Where INFO-and-above events are appended. `None` disables the file log.
    pub log_file: Option<PathBuf>,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 5050;
    /// Default upstream API root.
    pub const DEFAULT_UPSTREAM_BASE_URL: &'static str = "https://api.themoviedb.org/3";
    /// Default poster image prefix.
    pub const DEFAULT_IMAGE_BASE_URL: &'static str = "https://image.tmdb.org/t/p/w500";
    /// Default upstream timeout in seconds.
    pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
    /// Default log file path.
    pub const DEFAULT_LOG_FILE: &'static str = "movie_app.log";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is unset or empty, or if any
    /// optional variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = load_required(&lookup, API_KEY_VAR)?;
        let jwt_secret = load_required(&lookup, JWT_SECRET_VAR)?.into_bytes();
        let listen_port = load_listen_port(&lookup)?;
        let upstream_base_url = load_upstream_base_url(&lookup)?;
        let image_base_url = lookup(IMAGE_BASE_URL_VAR)
            .unwrap_or_else(|| Self::DEFAULT_IMAGE_BASE_URL.to_string());
        let upstream_timeout = load_upstream_timeout(&lookup)?;
        let log_file = match lookup(LOG_FILE_VAR) {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(Self::DEFAULT_LOG_FILE)),
        };

        Ok(Self {
            api_key,
            jwt_secret,
            listen_port,
            upstream_base_url,
            image_base_url,
            upstream_timeout,
            log_file,
        })
    }
}

/// Load a variable that must be present and non-empty.
fn load_required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: "must not be empty".to_string(),
        });
    }

    Ok(value)
}

fn load_listen_port<F>(lookup: &F) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(LISTEN_PORT_VAR) {
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            name: LISTEN_PORT_VAR.to_string(),
            message: format!("'{value}' is not a valid port number (must be 1-65535)"),
        }),
        None => Ok(ServerConfig::DEFAULT_PORT),
    }
}

fn load_upstream_base_url<F>(lookup: &F) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(UPSTREAM_BASE_URL_VAR)
        .unwrap_or_else(|| ServerConfig::DEFAULT_UPSTREAM_BASE_URL.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        name: UPSTREAM_BASE_URL_VAR.to_string(),
        message,
    };

    let url = Url::parse(&raw).map_err(|e| invalid(format!("'{raw}' is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid(format!("'{raw}' must be an absolute http(s) URL")));
    }

    Ok(url)
}

fn load_upstream_timeout<F>(lookup: &F) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(UPSTREAM_TIMEOUT_VAR) else {
        return Ok(Duration::from_secs(
            ServerConfig::DEFAULT_UPSTREAM_TIMEOUT_SECS,
        ));
    };

    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            name: UPSTREAM_TIMEOUT_VAR.to_string(),
            message: format!("'{value}' is not a positive number of seconds"),
        }),
    }
}
