//! HTTP surface.
//!
//! | Route | Auth |
//! |---|---|
//! | `GET /movie?id=<id>` | none |
//! | `GET /movies/list` | none |
//! | `GET /movies/summary` | none |
//! | `POST /auth/login` | none |
//! | `GET /auth/profile` | bearer token |
//!
//! Each handler makes at most one upstream call and shares nothing mutable
//! with other requests.

pub mod auth;
pub mod movies;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{JwtConfig, require_auth};
use crate::error::ApiError;
use crate::upstream::MovieSource;

/// Read-only state shared by every handler for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Upstream movie provider.
    pub movies: Arc<dyn MovieSource>,
    /// Token signing and verification keys.
    pub jwt: Arc<JwtConfig>,
    /// Prefix for poster images on the summary page.
    pub image_base_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(
        movies: Arc<dyn MovieSource>,
        jwt: JwtConfig,
        image_base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            movies,
            jwt: Arc::new(jwt),
            image_base_url: image_base_url.into(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/auth/profile", get(auth::profile))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.jwt),
            require_auth,
        ));

    Router::new()
        .route("/movie", get(movies::get_movie))
        .route("/movies/list", get(movies::list_movies))
        .route("/movies/summary", get(movies::movie_summary))
        .route("/auth/login", post(auth::login))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}
