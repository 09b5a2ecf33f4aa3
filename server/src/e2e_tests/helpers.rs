//! Common helpers for end-to-end tests.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::auth::JwtConfig;
use crate::routes::{AppState, router};
use crate::testing::StubMovieSource;
use crate::upstream::MovieSource;

pub const TEST_SECRET: &[u8] = b"e2e-test-secret";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

#[must_use]
pub fn jwt_config() -> JwtConfig {
    JwtConfig::new_hs256(TEST_SECRET).expect("valid secret")
}

/// The real router served on an ephemeral localhost port.
///
/// The server task is aborted on drop.
pub struct TestServer {
    base_url: String,
    client: Client,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Serve the router backed by `movies`.
    pub async fn start(movies: Arc<dyn MovieSource>) -> Self {
        let state = AppState::new(movies, jwt_config(), IMAGE_BASE);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router(state)).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
            task,
        }
    }

    /// Serve the router backed by a default [`StubMovieSource`].
    pub async fn with_stub(stub: StubMovieSource) -> Self {
        Self::start(Arc::new(stub)).await
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{path}", self.base_url))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{path}", self.base_url))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Send a request and return its status and body parsed as JSON.
pub async fn send_json(request: RequestBuilder) -> (StatusCode, Value) {
    let response = request.send().await.expect("request sent");
    let status = response.status();
    let body = response.text().await.expect("body read");
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("expected JSON body, got {body:?}: {e}"));
    (status, json)
}
