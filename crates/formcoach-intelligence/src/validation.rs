// ABOUTME: Keypoint usability checks run before any angle math
// ABOUTME: Rejects short frames, sentinel-missing landmarks, and low-confidence landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keypoint validation
//!
//! A frame is usable for an exercise when it carries the full 17-point
//! layout and every landmark the exercise needs was actually detected.

use formcoach_core::models::{Keypoint, KeypointIndex};
use thiserror::Error;

/// Why a frame cannot be analyzed
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrameIncomplete {
    /// The frame carries fewer entries than the 17-point layout
    #[error("expected {expected} keypoints, got {found}")]
    TooFewKeypoints {
        /// Entries present in the frame
        found: usize,
        /// Entries the layout requires
        expected: usize,
    },

    /// A required landmark was reported at the (0, 0) sentinel
    #[error("required landmark {0:?} was not detected")]
    MissingLandmark(KeypointIndex),

    /// A required landmark was detected below the configured confidence floor
    #[error("required landmark {landmark:?} has confidence {confidence:.2}")]
    LowConfidence {
        /// Landmark that failed
        landmark: KeypointIndex,
        /// Confidence reported by the pose model
        confidence: f64,
    },
}

/// Checks required landmarks before an analyzer touches them
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeypointValidator {
    min_confidence: f64,
}

impl KeypointValidator {
    /// Validator that rejects landmarks below `min_confidence`
    ///
    /// A floor of `0.0` disables the confidence rule.
    #[must_use]
    pub const fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Whether every required landmark is present and detected
    #[must_use]
    pub fn is_usable(&self, keypoints: &[Keypoint], required: &[KeypointIndex]) -> bool {
        self.validate(keypoints, required).is_ok()
    }

    /// Check the frame and report the first rule it breaks
    ///
    /// # Errors
    ///
    /// Returns the first [`FrameIncomplete`] reason found, checking frame
    /// length before any individual landmark.
    pub fn validate(
        &self,
        keypoints: &[Keypoint],
        required: &[KeypointIndex],
    ) -> Result<(), FrameIncomplete> {
        if keypoints.len() < KeypointIndex::COUNT {
            return Err(FrameIncomplete::TooFewKeypoints {
                found: keypoints.len(),
                expected: KeypointIndex::COUNT,
            });
        }

        for &landmark in required {
            let Some(keypoint) = landmark.lookup(keypoints) else {
                return Err(FrameIncomplete::MissingLandmark(landmark));
            };
            if keypoint.is_missing() {
                return Err(FrameIncomplete::MissingLandmark(landmark));
            }
            if keypoint.confidence < self.min_confidence {
                return Err(FrameIncomplete::LowConfidence {
                    landmark,
                    confidence: keypoint.confidence,
                });
            }
        }

        Ok(())
    }

    /// Mean confidence over the given landmarks, `0.0` when none are present
    #[must_use]
    pub fn mean_confidence(keypoints: &[Keypoint], landmarks: &[KeypointIndex]) -> f64 {
        let values: Vec<f64> = landmarks
            .iter()
            .filter_map(|landmark| landmark.lookup(keypoints))
            .map(|keypoint| keypoint.confidence)
            .collect();
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}
