//! Full stack: router -> `TmdbClient` -> mocked upstream.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::json;
use url::Url;

use crate::e2e_tests::helpers::*;
use crate::upstream::TmdbClient;

fn tmdb_client(upstream: &MockServer, timeout: Duration) -> TmdbClient {
    let base = Url::parse(&upstream.url("/3")).expect("mock base url");
    TmdbClient::new(base, "e2e-key", timeout).expect("client builds")
}

#[tokio::test]
async fn test_movie_passes_through_upstream_record() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/3/movie/550")
                .query_param("api_key", "e2e-key");
            then.status(200)
                .json_body(json!({ "id": 550, "title": "Fight Club", "runtime": 139 }));
        })
        .await;
    let server = TestServer::start(Arc::new(tmdb_client(&upstream, Duration::from_secs(5)))).await;

    let (status, body) = send_json(server.get("/movie")).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movie"]["runtime"], 139);
}

#[tokio::test]
async fn test_upstream_404_surfaces_as_500_without_api_key() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/3/movie/999999999");
            then.status(404)
                .json_body(json!({ "status_code": 34, "status_message": "Not found." }));
        })
        .await;
    let server = TestServer::start(Arc::new(tmdb_client(&upstream, Duration::from_secs(5)))).await;

    let (status, body) = send_json(server.get("/movie?id=999999999")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("404 Not Found for url: "));
    assert!(message.ends_with("/3/movie/999999999"));
    assert!(!message.contains("e2e-key"));
}

#[tokio::test]
async fn test_list_upstream_timeout_surfaces_as_500() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/3/movie/popular");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "results": [] }));
        })
        .await;
    let server =
        TestServer::start(Arc::new(tmdb_client(&upstream, Duration::from_millis(200)))).await;

    let (status, body) = send_json(server.get("/movies/list")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "upstream request timed out after 0.2s" })
    );
}
