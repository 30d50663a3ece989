// ABOUTME: HTTP integration tests for the pose feedback routes
// ABOUTME: Covers single-frame and batch analysis, the exercise list, error bodies, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::Router;
use formcoach_core::constants::messages;
use formcoach_core::models::KeypointIndex;
use formcoach_intelligence::FeedbackRouter;
use formcoach_server::{
    config::ServerConfig, resources::ServerResources, routes::FeedbackResponse,
    server::FeedbackServer,
};
use helpers::{axum_test::AxumTestRequest, poses};
use serde_json::{json, Value};
use std::sync::Arc;

/// Full application router with default rules and configuration
fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    let resources = ServerResources::new(FeedbackRouter::default(), Arc::new(config));
    FeedbackServer::new(Arc::new(resources)).router()
}

// ============================================================================
// POST /feedback/analyze
// ============================================================================

#[tokio::test]
async fn test_analyze_good_squat() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": poses::good_squat(), "exerciseType": "squat" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: FeedbackResponse = response.json();
    assert_eq!(
        body.feedback,
        vec![
            "Perfect squat depth! Keep it up! 💪",
            "Excellent back position! 👍",
            "Perfect shin angle - you've got this! ⭐",
        ]
    );
}

#[tokio::test]
async fn test_analyze_empty_keypoints() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": [], "exerciseType": "squat" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "feedback": [messages::NOT_VISIBLE] }));
}

#[tokio::test]
async fn test_analyze_absent_or_null_keypoints() {
    for body in [
        json!({ "exerciseType": "plank" }),
        json!({ "keypoints": null, "exerciseType": "plank" }),
    ] {
        let response = AxumTestRequest::post("/feedback/analyze")
            .json(&body)
            .send(app())
            .await;

        assert_eq!(response.status(), 200);
        let body: FeedbackResponse = response.json();
        assert_eq!(body.feedback, vec![messages::NOT_VISIBLE]);
    }
}

#[tokio::test]
async fn test_analyze_unknown_exercise() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": [], "exerciseType": "cartwheel" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: FeedbackResponse = response.json();
    assert_eq!(body.feedback, vec![messages::EXERCISE_NOT_SUPPORTED]);
}

#[tokio::test]
async fn test_analyze_short_frame() {
    let frame = poses::good_squat();
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": &frame[..8], "exerciseType": "lunge" }))
        .send(app())
        .await;

    let body: FeedbackResponse = response.json();
    assert_eq!(body.feedback, vec![messages::FULL_BODY_NOT_VISIBLE]);
}

#[tokio::test]
async fn test_analyze_accepts_keypoints_without_confidence() {
    let frame: Vec<Value> = poses::good_squat()
        .iter()
        .map(|point| json!([point.x, point.y]))
        .collect();
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": frame, "exerciseType": "squat" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: FeedbackResponse = response.json();
    assert_eq!(body.feedback.len(), 3);
}

#[tokio::test]
async fn test_analyze_treats_null_keypoint_as_undetected() {
    let mut frame: Vec<Value> = poses::good_squat().iter().map(|point| json!(point)).collect();
    frame[KeypointIndex::LeftKnee.position()] = Value::Null;
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": frame, "exerciseType": "squat" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: FeedbackResponse = response.json();
    assert_eq!(body.feedback, vec![messages::REPOSITION_LEGS]);
}

#[tokio::test]
async fn test_analyze_malformed_json() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .raw_json("{\"keypoints\": [[1, 2, 3]")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_analyze_missing_exercise_type() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": [] }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_analyze_rejects_short_keypoint_entries() {
    let response = AxumTestRequest::post("/feedback/analyze")
        .json(&json!({ "keypoints": [[1.0]], "exerciseType": "squat" }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// POST /feedback/analyze/batch
// ============================================================================

#[tokio::test]
async fn test_batch_analysis_keeps_frame_order() {
    let response = AxumTestRequest::post("/feedback/analyze/batch")
        .json(&json!({
            "exerciseType": "squat",
            "frames": [poses::good_squat(), [], poses::squat(140.0, 40.0, 15.0)]
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let frames = body["feedback"].as_array().unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].as_array().unwrap().len(), 3);
    assert_eq!(frames[1], json!([messages::NOT_VISIBLE]));
    assert_eq!(
        frames[2][0],
        "You're doing great! Try bending your knees a bit more for better form"
    );
}

#[tokio::test]
async fn test_batch_unknown_exercise() {
    let response = AxumTestRequest::post("/feedback/analyze/batch")
        .json(&json!({ "exerciseType": "yoga", "frames": [[]] }))
        .send(app())
        .await;

    let body: Value = response.json();
    assert_eq!(body, json!({ "feedback": [[messages::EXERCISE_NOT_SUPPORTED]] }));
}

// ============================================================================
// GET /feedback/exercises
// ============================================================================

#[tokio::test]
async fn test_list_exercises() {
    let response = AxumTestRequest::get("/feedback/exercises").send(app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "exercises": ["squat", "lunge", "armRaise", "plank"] })
    );
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let response = AxumTestRequest::options("/feedback/analyze")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send(app())
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let response = AxumTestRequest::options("/feedback/analyze")
        .header("origin", "https://elsewhere.example")
        .header("access-control-request-method", "POST")
        .send(app())
        .await;

    assert_eq!(response.header("access-control-allow-origin"), None);
}

#[tokio::test]
async fn test_cors_wildcard() {
    let config = ServerConfig {
        cors_allowed_origins: vec!["*".to_owned()],
        ..ServerConfig::default()
    };
    let response = AxumTestRequest::get("/feedback/exercises")
        .header("origin", "https://elsewhere.example")
        .send(app_with(config))
        .await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
