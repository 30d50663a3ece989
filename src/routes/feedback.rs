// ABOUTME: Pose feedback route handlers for single-frame and batch analysis
// ABOUTME: Maps the camelCase wire format onto the rules engine and lists supported exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback routes
//!
//! Unknown exercises and empty frames are answered with a 200 and a single
//! fallback message; only bodies that are not valid JSON for the request
//! shape are rejected with a 400.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use formcoach_core::constants::endpoints;
use formcoach_core::errors::{AppError, AppResult};
use formcoach_core::models::{ExerciseType, Keypoint};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

use crate::resources::ServerResources;

/// Body of `POST /feedback/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// One frame of keypoints; absent or `null` is treated as empty
    #[serde(default)]
    pub keypoints: Option<Vec<Keypoint>>,
    /// Exercise tag such as `squat` or `armRaise`
    #[serde(rename = "exerciseType")]
    pub exercise_type: String,
}

/// Body of `POST /feedback/analyze/batch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeRequest {
    /// Frames to evaluate, in order
    #[serde(default)]
    pub frames: Vec<Vec<Keypoint>>,
    /// Exercise tag shared by every frame
    #[serde(rename = "exerciseType")]
    pub exercise_type: String,
}

/// Feedback for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// Messages in emission order, never empty
    pub feedback: Vec<String>,
}

/// Feedback for a batch of frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFeedbackResponse {
    /// One message list per input frame
    pub feedback: Vec<Vec<String>>,
}

/// Supported exercise tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisesResponse {
    /// Tags accepted by the analysis endpoints
    pub exercises: Vec<ExerciseType>,
}

/// Feedback analysis routes
pub struct FeedbackRoutes;

impl FeedbackRoutes {
    /// Create all feedback routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::FEEDBACK_ANALYZE, post(Self::handle_analyze))
            .route(endpoints::FEEDBACK_ANALYZE_BATCH, post(Self::handle_analyze_batch))
            .route(endpoints::FEEDBACK_EXERCISES, get(Self::handle_exercises))
            .with_state(resources)
    }

    /// Handle single-frame analysis
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<AnalyzeRequest>, JsonRejection>,
    ) -> AppResult<Json<FeedbackResponse>> {
        let Json(request) = body.map_err(|e| AppError::invalid_format(e.body_text()))?;
        let keypoints = request.keypoints.as_deref().unwrap_or_default();
        debug!(
            exercise = %request.exercise_type,
            keypoints = keypoints.len(),
            "Analyzing frame"
        );

        let feedback = resources.router.evaluate(keypoints, &request.exercise_type);
        Ok(Json(FeedbackResponse { feedback }))
    }

    /// Handle multi-frame analysis
    ///
    /// Frames are evaluated on rayon's pool, off the async runtime.
    async fn handle_analyze_batch(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<BatchAnalyzeRequest>, JsonRejection>,
    ) -> AppResult<Json<BatchFeedbackResponse>> {
        let Json(request) = body.map_err(|e| AppError::invalid_format(e.body_text()))?;
        debug!(
            exercise = %request.exercise_type,
            frames = request.frames.len(),
            "Analyzing batch"
        );

        let feedback = task::spawn_blocking(move || {
            resources
                .router
                .evaluate_frames(&request.frames, &request.exercise_type)
        })
        .await
        .map_err(|e| AppError::internal(format!("Batch analysis failed: {e}")))?;

        Ok(Json(BatchFeedbackResponse { feedback }))
    }

    /// List supported exercises
    async fn handle_exercises() -> Json<ExercisesResponse> {
        Json(ExercisesResponse {
            exercises: ExerciseType::ALL.to_vec(),
        })
    }
}
