//! Typed views over the upstream's popular-movies document.
//!
//! Only the fields this server reads are modelled; everything else in the
//! upstream record is ignored. Field values are not validated: the list view
//! copies `id` and `title` through as whatever JSON the upstream sent.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::upstream::UpstreamError;

/// One page of popular movies, each entry read as `M`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopularPage<M> {
    /// Absent `results` reads as an empty page.
    #[serde(default = "Vec::new")]
    pub results: Vec<M>,
}

impl<M: DeserializeOwned> PopularPage<M> {
    /// Interpret a raw upstream document.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Decode` if `results` is not a list or an entry
    /// does not fit `M`.
    pub fn from_value(document: Value) -> Result<Self, UpstreamError> {
        serde_json::from_value(document).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

/// The `{id, title}` pair clients use to pick a movie id.
///
/// Both keys must be present; their values are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListing {
    pub id: Value,
    pub title: Value,
}

/// Fields shown on a summary card. Missing or null fields render as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Body of `GET /movies/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieListResponse {
    pub available_movies: Vec<MovieListing>,
}
