//! Movie pass-through handlers.

use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use super::AppState;
use crate::error::ApiError;
use crate::render;
use crate::types::{MovieListResponse, MovieListing, PopularPage, SummaryMovie};
use crate::upstream::MovieId;

#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub id: Option<String>,
}

/// `GET /movie?id=<id>`: one movie record, `id` defaulting to 550.
pub async fn get_movie(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = MovieId::from_param(query.id.as_deref());

    match state.movies.fetch_movie(&id).await {
        Ok(movie) => {
            tracing::info!(movie_id = %id, "movie fetch succeeded");
            Ok(Json(json!({ "status": "success", "movie": movie })))
        }
        Err(e) => {
            tracing::error!(movie_id = %id, error = %e, "movie fetch failed");
            Err(ApiError::Movie(e))
        }
    }
}

/// `GET /movies/list`: `{id, title}` for each popular movie.
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let page = fetch_popular_page::<MovieListing>(&state)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "movie list fetch failed"))?;

    Ok(Json(MovieListResponse {
        available_movies: page.results,
    }))
}

/// `GET /movies/summary`: HTML card grid of popular movies.
pub async fn movie_summary(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = fetch_popular_page::<SummaryMovie>(&state)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "movie summary fetch failed"))?;

    Ok(Html(render::summary_page(&page.results, &state.image_base_url)))
}

async fn fetch_popular_page<M: DeserializeOwned>(
    state: &AppState,
) -> Result<PopularPage<M>, ApiError> {
    let document = state.movies.fetch_popular_movies().await?;
    Ok(PopularPage::from_value(document)?)
}
