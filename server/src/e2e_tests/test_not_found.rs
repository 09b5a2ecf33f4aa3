//! Unknown routes.

use reqwest::StatusCode;
use serde_json::json;

use crate::e2e_tests::helpers::*;
use crate::testing::StubMovieSource;

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = TestServer::with_stub(StubMovieSource::new()).await;

    let (status, body) = send_json(server.get("/movies/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
