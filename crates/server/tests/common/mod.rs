//! Common test utilities for in-process API testing with mocks.
//!
//! This module provides a test fixture that builds the router with mock
//! collaborators injected, so the HTTP surface can be exercised without
//! OMDb or Real-Debrid.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use titulky_core::{
    testing::{MockDebridClient, MockTitleLookup},
    Config, DebridClient, TitleLookup,
};
use titulky_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use titulky_core::testing::fixtures;

/// Test fixture with controllable collaborators.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_rank() {
///     let fixture = TestFixture::new();
///     fixture.title_lookup.add_title("tt1375666", fixtures::movie_title("Inception", "2010")).await;
///
///     let response = fixture.post("/api/v1/rank", json!({
///         "candidates": [],
///         "imdb_id": "tt1375666"
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock title lookup - register titles by IMDb id
    pub title_lookup: Arc<MockTitleLookup>,
    /// Mock debrid client - set the active stream
    pub debrid: Arc<MockDebridClient>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with default config and both mocks wired in.
    pub fn new() -> Self {
        Self::with_config(Config::default(), true)
    }

    /// Create a fixture with a custom config; `with_clients = false` leaves
    /// both collaborators unconfigured.
    pub fn with_config(config: Config, with_clients: bool) -> Self {
        let title_lookup = Arc::new(MockTitleLookup::new());
        let debrid = Arc::new(MockDebridClient::new());

        let (lookup, debrid_client) = if with_clients {
            (
                Some(Arc::clone(&title_lookup) as Arc<dyn TitleLookup>),
                Some(Arc::clone(&debrid) as Arc<dyn DebridClient>),
            )
        } else {
            (None, None)
        };

        let state = Arc::new(AppState::new(config, lookup, debrid_client));
        let router = create_router(state);

        Self {
            router,
            title_lookup,
            debrid,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).to_string())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
