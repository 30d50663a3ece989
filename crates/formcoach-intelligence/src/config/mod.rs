// ABOUTME: Feedback engine configuration: per-exercise threshold tables and confidence floor
// ABOUTME: Loads overrides from YAML and validates every table before the engine uses it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback engine configuration
//!
//! The defaults are the canonical threshold tables. A deployment may replace
//! any exercise's table from a YAML document; omitted exercises keep their
//! defaults.

mod error;
/// Rule table types
pub mod rules;

pub use error::ConfigError;
pub use rules::{
    AngleCheck, AngleDefinition, ExerciseRules, Laterality, Limit, SymmetryCheck, SymmetryRules,
};

use formcoach_core::models::ExerciseType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::exercises;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Landmarks below this confidence count as not detected (0.0 disables)
    pub min_confidence: f64,
    /// Squat rule table
    pub squat: ExerciseRules,
    /// Lunge rule table
    pub lunge: ExerciseRules,
    /// Arm raise rule table
    pub arm_raise: ExerciseRules,
    /// Plank rule table
    pub plank: ExerciseRules,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            squat: exercises::squat::rules(),
            lunge: exercises::lunge::rules(),
            arm_raise: exercises::arm_raise::rules(),
            plank: exercises::plank::rules(),
        }
    }
}

impl FeedbackConfig {
    /// Rule table for an exercise
    #[must_use]
    pub const fn rules(&self, exercise: ExerciseType) -> &ExerciseRules {
        match exercise {
            ExerciseType::Squat => &self.squat,
            ExerciseType::Lunge => &self.lunge,
            ExerciseType::ArmRaise => &self.arm_raise,
            ExerciseType::Plank => &self.plank,
        }
    }

    /// Validate the confidence floor and every rule table
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "min_confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            )));
        }
        for exercise in ExerciseType::ALL {
            self.rules(exercise).validate().map_err(|error| match error {
                ConfigError::InvalidRange(detail) => {
                    ConfigError::InvalidRange(format!("{exercise}: {detail}"))
                }
                ConfigError::MissingField(detail) => {
                    ConfigError::MissingField(format!("{exercise}: {detail}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Parse and validate a YAML rules document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML and any validation
    /// error from [`FeedbackConfig::validate`].
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a YAML rules file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the same errors as [`FeedbackConfig::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_yaml_str(&document)
    }

    /// Render the configuration as YAML
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
