use std::sync::Mutex;

use futures::future::{self, BoxFuture};
use serde_json::{Value, json};

use crate::upstream::{MovieId, MovieSource, UpstreamError};

/// In-process [`MovieSource`] returning canned results.
///
/// Records every requested movie id so tests can assert on what reached the
/// upstream.
pub struct StubMovieSource {
    movie: Result<Value, UpstreamError>,
    popular: Result<Value, UpstreamError>,
    requested: Mutex<Vec<MovieId>>,
}

impl Default for StubMovieSource {
    fn default() -> Self {
        Self {
            movie: Ok(json!({})),
            popular: Ok(json!({ "results": [] })),
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl StubMovieSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_movie(mut self, result: Result<Value, UpstreamError>) -> Self {
        self.movie = result;
        self
    }

    #[must_use]
    pub fn with_popular(mut self, result: Result<Value, UpstreamError>) -> Self {
        self.popular = result;
        self
    }

    /// Ids passed to `fetch_movie`, in call order.
    #[must_use]
    pub fn requested_ids(&self) -> Vec<MovieId> {
        self.requested
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }
}

impl MovieSource for StubMovieSource {
    fn fetch_movie<'a>(&'a self, id: &'a MovieId) -> BoxFuture<'a, Result<Value, UpstreamError>> {
        if let Ok(mut ids) = self.requested.lock() {
            ids.push(id.clone());
        }
        Box::pin(future::ready(self.movie.clone()))
    }

    fn fetch_popular_movies(&self) -> BoxFuture<'_, Result<Value, UpstreamError>> {
        Box::pin(future::ready(self.popular.clone()))
    }
}

/// Two-entry popular page used across list tests.
#[must_use]
pub fn two_movie_page() -> Value {
    json!({
        "page": 1,
        "results": [
            { "id": 1, "title": "A", "overview": "First.", "poster_path": "/a.jpg" },
            { "id": 2, "title": "B", "overview": "Second.", "poster_path": null }
        ]
    })
}
