//! `GET /movie`.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use crate::e2e_tests::helpers::*;
use crate::testing::StubMovieSource;
use crate::upstream::{MovieId, UpstreamError};

#[tokio::test]
async fn test_movie_success_envelope() {
    let stub = StubMovieSource::new().with_movie(Ok(json!({ "id": 603, "title": "The Matrix" })));
    let server = TestServer::with_stub(stub).await;

    let (status, body) = send_json(server.get("/movie?id=603")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "movie": { "id": 603, "title": "The Matrix" } })
    );
}

#[tokio::test]
async fn test_movie_defaults_to_550() {
    let stub = Arc::new(StubMovieSource::new());
    let server = TestServer::start(stub.clone()).await;

    let (status, _) = send_json(server.get("/movie")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(server.get("/movie?id=")).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        stub.requested_ids(),
        vec![MovieId::default(), MovieId::default()]
    );
    assert_eq!(MovieId::default().as_str(), "550");
}

#[tokio::test]
async fn test_movie_upstream_failure_is_500_with_message() {
    let stub = StubMovieSource::new().with_movie(Err(UpstreamError::Status {
        status: 404,
        reason: "Not Found".to_string(),
        url: "https://api.themoviedb.org/3/movie/0".to_string(),
    }));
    let server = TestServer::with_stub(stub).await;

    let (status, body) = send_json(server.get("/movie?id=0")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "message": "404 Not Found for url: https://api.themoviedb.org/3/movie/0"
        })
    );
}

#[tokio::test]
async fn test_movie_timeout_is_500() {
    let stub = StubMovieSource::new().with_movie(Err(UpstreamError::Timeout {
        after: std::time::Duration::from_secs(10),
    }));
    let server = TestServer::with_stub(stub).await;

    let (status, body) = send_json(server.get("/movie?id=550")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "upstream request timed out after 10s");
}
