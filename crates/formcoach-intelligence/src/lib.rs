// ABOUTME: Pose feedback rules engine turning keypoint arrays into coaching messages
// ABOUTME: Angle math, keypoint validation, data-driven exercise analyzers, and dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Formcoach Intelligence
//!
//! The pipeline is pure and synchronous: keypoints in, validate, compute
//! angles, classify against threshold tables, ordered feedback out. Nothing
//! here holds mutable state, so one [`FeedbackRouter`] can be shared across
//! any number of concurrent callers.
//!
//! ```rust,ignore
//! use formcoach_intelligence::FeedbackRouter;
//!
//! let router = FeedbackRouter::default();
//! let messages = router.evaluate(&keypoints, "squat");
//! ```

/// Joint angle computation
pub mod geometry;

/// Keypoint presence and confidence checks
pub mod validation;

/// Feedback result types (bands, cues, fallbacks)
pub mod feedback;

/// Threshold tables and their validation
pub mod config;

/// Default threshold tables for each supported exercise
pub mod exercises;

/// Table-driven analyzer shared by every exercise
pub mod analyzer;

/// Exercise dispatch
pub mod router;

pub use analyzer::ExerciseAnalyzer;
pub use config::{ConfigError, FeedbackConfig};
pub use feedback::{Assessment, Band, Cue, Fallback, Feedback};
pub use geometry::{angle, GeometryError};
pub use router::FeedbackRouter;
pub use validation::{FrameIncomplete, KeypointValidator};
