//! Integration tests for the AI insight flow against a fake completion
//! service

mod common;

use axum::http::StatusCode;
use serde_json::Value;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generate_insights_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(serde_json::json!({ "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Mood is trending down alongside shorter sleep; worth discussing."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::TestApp::with_ai_base_url(&server.uri());

    let (status, body) = app.post("/api/v1/patients/pat_2/insights", "{}").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["insights"],
        "Mood is trending down alongside shorter sleep; worth discussing."
    );

    // The profile now carries the insight and a timeline event
    let (_, body) = app.get("/api/v1/patients/pat_2").await;
    let profile: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(profile["ai_insights"], json["insights"]);
    assert_eq!(profile["treatment_history"][0]["kind"], "insight");
}

#[tokio::test]
async fn test_blank_completion_fails_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "   " })),
        )
        .mount(&server)
        .await;

    let app = common::TestApp::with_ai_base_url(&server.uri());

    let (status, body) = app.post("/api/v1/patients/pat_1/insights", "{}").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("EMPTY_RESPONSE"));

    // Prior state is unchanged
    let (_, body) = app.get("/api/v1/patients/pat_1").await;
    let profile: Value = serde_json::from_str(&body).unwrap();
    assert!(profile.get("ai_insights").is_none());
}

#[tokio::test]
async fn test_unknown_patient_fails_before_calling_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "should never be requested"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let app = common::TestApp::with_ai_base_url(&server.uri());

    let (status, body) = app.post("/api/v1/patients/pat_999/insights", "{}").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let app = common::TestApp::with_ai_base_url(&server.uri());

    let (status, body) = app.post("/api/v1/patients/pat_1/insights", "{}").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("UPSTREAM_ERROR"));
}
