// ABOUTME: Table-driven exercise analyzer shared by every exercise variant
// ABOUTME: Validates landmarks, measures angles, classifies bands, and appends symmetry cues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise analyzer
//!
//! Every exercise runs the same pipeline over its own [`ExerciseRules`]:
//!
//! 1. frame length and required-landmark guard (early return)
//! 2. side selection for side-view exercises
//! 3. angle measurement and three-band classification, in table order
//! 4. symmetry cues for bilateral checks
//!
//! Geometry failures never escape: they become a single
//! [`Fallback::DegenerateGeometry`] message.

use formcoach_core::constants::messages::FULL_BODY_NOT_VISIBLE;
use formcoach_core::models::{Keypoint, Side};
use tracing::{trace, warn};

use crate::config::{ExerciseRules, Laterality, SymmetryRules};
use crate::feedback::{Assessment, Cue, Fallback, Feedback};
use crate::geometry::GeometryError;
use crate::validation::{FrameIncomplete, KeypointValidator};

/// Analyzer for one exercise's rule table
#[derive(Debug, Clone, Copy)]
pub struct ExerciseAnalyzer<'a> {
    rules: &'a ExerciseRules,
    validator: KeypointValidator,
}

/// Left and right readings of one bilateral check
struct SidePair<'a> {
    check: &'a str,
    left: f64,
    right: f64,
}

impl<'a> ExerciseAnalyzer<'a> {
    /// Analyzer over a rule table
    #[must_use]
    pub const fn new(rules: &'a ExerciseRules, validator: KeypointValidator) -> Self {
        Self { rules, validator }
    }

    /// Produce ordered feedback for one frame
    #[must_use]
    pub fn analyze(&self, keypoints: &[Keypoint]) -> Feedback {
        let selected = match self.select_side(keypoints) {
            Ok(selected) => selected,
            Err(reason) => {
                trace!(%reason, "frame not usable");
                return Feedback::Fallback(self.reposition(reason));
            }
        };

        match self.assess(keypoints, selected) {
            Ok(cues) => Feedback::Cues(cues),
            Err(error) => {
                warn!(%error, "angle computation failed, asking user to reposition");
                Feedback::Fallback(Fallback::DegenerateGeometry)
            }
        }
    }

    /// Validate the frame and pick the side for side-selected checks
    ///
    /// Returns `None` when the table has no side-selected checks. Otherwise
    /// the side whose landmarks are all usable wins, preferring the higher
    /// mean confidence and the left side on ties.
    ///
    /// # Errors
    ///
    /// Returns the first [`FrameIncomplete`] reason when the frame is short,
    /// a fixed landmark is unusable, or neither side is fully visible.
    pub fn select_side(&self, keypoints: &[Keypoint]) -> Result<Option<Side>, FrameIncomplete> {
        self.validator
            .validate(keypoints, &self.rules.fixed_landmarks())?;
        if !self.rules.uses_side_selection() {
            return Ok(None);
        }

        let mut best: Option<(Side, f64)> = None;
        let mut first_failure = None;
        for side in [Side::Left, Side::Right] {
            let landmarks = self.rules.selected_landmarks(side);
            match self.validator.validate(keypoints, &landmarks) {
                Ok(()) => {
                    let confidence = KeypointValidator::mean_confidence(keypoints, &landmarks);
                    if best.is_none_or(|(_, current)| confidence > current) {
                        best = Some((side, confidence));
                    }
                }
                Err(reason) => {
                    first_failure.get_or_insert(reason);
                }
            }
        }

        match (best, first_failure) {
            (Some((side, _)), _) => Ok(Some(side)),
            (None, Some(reason)) => Err(reason),
            (None, None) => Ok(None),
        }
    }

    fn reposition(&self, reason: FrameIncomplete) -> Fallback {
        let message = match reason {
            FrameIncomplete::TooFewKeypoints { .. } => FULL_BODY_NOT_VISIBLE.to_owned(),
            FrameIncomplete::MissingLandmark(_) | FrameIncomplete::LowConfidence { .. } => {
                self.rules.reposition_message.clone()
            }
        };
        Fallback::Reposition { reason, message }
    }

    fn assess(
        &self,
        keypoints: &[Keypoint],
        selected: Option<Side>,
    ) -> Result<Vec<Cue>, GeometryError> {
        let mut cues = Vec::with_capacity(self.rules.checks.len() + 1);
        let mut pairs = Vec::new();

        for check in &self.rules.checks {
            let band = match check.laterality {
                Laterality::Bilateral => {
                    let left = check.angle.on_side(Side::Left).measure(keypoints)?;
                    let right = check.angle.on_side(Side::Right).measure(keypoints)?;
                    pairs.push(SidePair {
                        check: &check.name,
                        left,
                        right,
                    });
                    check.classify(left).stricter(check.classify(right))
                }
                Laterality::Left => {
                    check.classify(check.angle.on_side(Side::Left).measure(keypoints)?)
                }
                Laterality::Right => {
                    check.classify(check.angle.on_side(Side::Right).measure(keypoints)?)
                }
                Laterality::Selected => {
                    let side = selected.unwrap_or(Side::Left);
                    check.classify(check.angle.on_side(side).measure(keypoints)?)
                }
            };
            trace!(check = %check.name, ?band, "check classified");
            cues.push(Cue {
                check: check.name.clone(),
                assessment: Assessment::Band(band),
                message: check.message(band).to_owned(),
            });
        }

        if let Some(symmetry) = &self.rules.symmetry {
            cues.extend(symmetry_cue(symmetry, &pairs));
        }

        Ok(cues)
    }
}

fn symmetry_cue(rules: &SymmetryRules, pairs: &[SidePair<'_>]) -> Option<Cue> {
    for rule in &rules.checks {
        let Some(pair) = pairs.iter().find(|pair| pair.check == rule.check) else {
            continue;
        };
        if (pair.left - pair.right).abs() > rule.max_difference {
            return Some(Cue {
                check: rule.check.clone(),
                assessment: Assessment::Asymmetric,
                message: rule.message.clone(),
            });
        }
    }
    rules.balanced.as_ref().map(|message| Cue {
        check: "symmetry".to_owned(),
        assessment: Assessment::Balanced,
        message: message.clone(),
    })
}
