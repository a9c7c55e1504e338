//! Common test utilities for integration tests
//!
//! This module provides a router-level test harness; no external services
//! are required beyond an optional wiremock completion server.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mindtrack_backend::ai::{CompletionClient, FixedCompletion, OllamaClient};
use mindtrack_backend::config::AppConfig;
use mindtrack_backend::generator::MockDataProvider;
use mindtrack_backend::store::PatientStore;
use mindtrack_backend::{routes, state::AppState};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with a canned completion client
    pub fn new() -> Self {
        Self::with_completion(Arc::new(FixedCompletion::new(
            "Patient appears stable; keep monitoring sleep.",
        )))
    }

    /// Create a test application pointing the insight flow at `base_url`
    /// (usually a wiremock server)
    pub fn with_ai_base_url(base_url: &str) -> Self {
        let client = OllamaClient::new(base_url, "llama3.2", Duration::from_secs(5))
            .expect("Failed to build completion client");
        Self::with_completion(Arc::new(client))
    }

    pub fn with_completion(completion: Arc<dyn CompletionClient>) -> Self {
        let config = test_config();
        let provider = MockDataProvider::new(config.mock.seed, config.mock.wearable_days);
        let store = PatientStore::new(provider);
        let state = AppState::new(store, completion, config);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.mock.seed = 42;
    config.mock.live_interval_ms = 25;
    config.ai.timeout_secs = 5;
    config
}
