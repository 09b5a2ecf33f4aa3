//! Tracing subscriber setup.
//!
//! Console output is filtered through `RUST_LOG` (default `movie_server=debug`).
//! When a log file is configured, every INFO-and-above event is also appended
//! to it without ANSI colours, one line per event, regardless of `RUST_LOG`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Default console filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "movie_server=debug";

/// Error returned when the tracing pipeline cannot be installed.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: Option<&Path>) -> Result<(), TelemetryError> {
    let file_layer = log_file.map(file_layer::<Registry>).transpose()?;
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(tracing_subscriber::fmt::layer().with_filter(console_filter))
        .try_init()?;

    Ok(())
}

/// Build a layer appending INFO-and-above events to `path`.
///
/// The file is created if missing and never truncated.
pub fn file_layer<S>(path: &Path) -> Result<impl Layer<S> + Send + Sync, TelemetryError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = open_append(path).map_err(|source| TelemetryError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(LevelFilter::INFO))
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
