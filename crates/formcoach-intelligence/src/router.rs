// ABOUTME: Dispatches a keypoint frame to the analyzer for the requested exercise
// ABOUTME: Resolves exercise tags, handles empty frames, and fans batches out with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::models::{ExerciseType, Keypoint};
use rayon::prelude::*;
use tracing::debug;

use crate::analyzer::ExerciseAnalyzer;
use crate::config::{ConfigError, FeedbackConfig};
use crate::feedback::{Fallback, Feedback};
use crate::validation::KeypointValidator;

/// Entry point of the engine
///
/// Built once at startup and shared read-only; every call is a pure
/// function of its inputs and the loaded configuration.
#[derive(Debug, Clone)]
pub struct FeedbackRouter {
    config: FeedbackConfig,
    validator: KeypointValidator,
}

impl Default for FeedbackRouter {
    fn default() -> Self {
        let config = FeedbackConfig::default();
        let validator = KeypointValidator::new(config.min_confidence);
        Self { config, validator }
    }
}

impl FeedbackRouter {
    /// Router over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any rule table is inconsistent.
    pub fn new(config: FeedbackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let validator = KeypointValidator::new(config.min_confidence);
        Ok(Self { config, validator })
    }

    /// Loaded configuration
    #[must_use]
    pub const fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Analyzer for one exercise
    #[must_use]
    pub const fn analyzer(&self, exercise: ExerciseType) -> ExerciseAnalyzer<'_> {
        ExerciseAnalyzer::new(self.config.rules(exercise), self.validator)
    }

    /// Evaluate one frame against an exercise tag
    ///
    /// The tag is resolved before the frame is looked at, so an unknown tag
    /// always yields the unsupported-exercise message. Never fails and never
    /// returns an empty list.
    #[must_use]
    pub fn evaluate(&self, keypoints: &[Keypoint], exercise: &str) -> Vec<String> {
        self.evaluate_tagged(keypoints, exercise).into_messages()
    }

    /// Evaluate one frame and keep the structured result
    #[must_use]
    pub fn evaluate_tagged(&self, keypoints: &[Keypoint], exercise: &str) -> Feedback {
        match exercise.parse::<ExerciseType>() {
            Ok(exercise) => self.evaluate_exercise(keypoints, exercise),
            Err(error) => {
                debug!(%error, "rejecting frame for unknown exercise");
                Feedback::Fallback(Fallback::UnsupportedExercise)
            }
        }
    }

    /// Evaluate one frame for an already resolved exercise
    #[must_use]
    pub fn evaluate_exercise(&self, keypoints: &[Keypoint], exercise: ExerciseType) -> Feedback {
        if keypoints.is_empty() {
            debug!(%exercise, "empty frame");
            return Feedback::Fallback(Fallback::NotVisible);
        }
        let feedback = self.analyzer(exercise).analyze(keypoints);
        debug!(%exercise, cues = feedback.cues().len(), "frame evaluated");
        feedback
    }

    /// Evaluate a sequence of frames for the same exercise
    ///
    /// Frames are independent, so they are evaluated in parallel. Output
    /// order matches input order.
    #[must_use]
    pub fn evaluate_frames(&self, frames: &[Vec<Keypoint>], exercise: &str) -> Vec<Vec<String>> {
        let Ok(exercise) = exercise.parse::<ExerciseType>() else {
            debug!(exercise, frames = frames.len(), "rejecting batch for unknown exercise");
            return vec![
                Feedback::Fallback(Fallback::UnsupportedExercise).into_messages();
                frames.len()
            ];
        };
        frames
            .par_iter()
            .map(|frame| self.evaluate_exercise(frame, exercise).into_messages())
            .collect()
    }
}
