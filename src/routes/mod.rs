// ABOUTME: Route module organization for the formcoach HTTP endpoints
// ABOUTME: Groups feedback analysis and service health routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Each module holds route definitions and thin handlers that delegate to
//! the rules engine held in [`ServerResources`](crate::resources::ServerResources).

/// Pose feedback analysis routes
pub mod feedback;
/// Health check and service info routes
pub mod health;

pub use feedback::{
    AnalyzeRequest, BatchAnalyzeRequest, BatchFeedbackResponse, ExercisesResponse,
    FeedbackResponse, FeedbackRoutes,
};
pub use health::HealthRoutes;
