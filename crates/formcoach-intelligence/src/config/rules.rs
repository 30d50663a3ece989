// ABOUTME: Threshold table types describing how an exercise is measured and classified
// ABOUTME: Angle definitions, laterality, three-band limits, and symmetry rules as plain data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise rule tables
//!
//! Every exercise is described by an [`ExerciseRules`] value rather than by
//! code. Landmarks are always written for the subject's left side; checks
//! evaluated on the right side mirror them.

use formcoach_core::models::{Keypoint, KeypointIndex, Side};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::feedback::Band;
use crate::geometry::{self, GeometryError, VerticalDirection};

/// Largest interior angle the geometry can produce
pub const MAX_DEGREES: f64 = 180.0;

/// How an angle is measured from landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AngleDefinition {
    /// Interior angle at `vertex` between `first` and `last`
    Joint {
        /// Outer landmark on the first ray
        first: KeypointIndex,
        /// Joint the angle is measured at
        vertex: KeypointIndex,
        /// Outer landmark on the second ray
        last: KeypointIndex,
    },
    /// Angle at `vertex` between the segment toward `from` and image vertical
    FromVertical {
        /// Far end of the measured segment
        from: KeypointIndex,
        /// Joint the angle is measured at
        vertex: KeypointIndex,
        /// Direction of the vertical reference
        direction: VerticalDirection,
    },
}

impl AngleDefinition {
    /// Landmarks this angle reads
    #[must_use]
    pub fn landmarks(&self) -> Vec<KeypointIndex> {
        match *self {
            Self::Joint {
                first,
                vertex,
                last,
            } => vec![first, vertex, last],
            Self::FromVertical { from, vertex, .. } => vec![from, vertex],
        }
    }

    /// The same definition expressed on the given side of the body
    #[must_use]
    pub fn on_side(&self, side: Side) -> Self {
        match *self {
            Self::Joint {
                first,
                vertex,
                last,
            } => Self::Joint {
                first: first.on_side(side),
                vertex: vertex.on_side(side),
                last: last.on_side(side),
            },
            Self::FromVertical {
                from,
                vertex,
                direction,
            } => Self::FromVertical {
                from: from.on_side(side),
                vertex: vertex.on_side(side),
                direction,
            },
        }
    }

    /// Measure the angle in degrees
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from the angle computation, or
    /// [`GeometryError::LandmarkOutOfRange`] when the frame is too short.
    pub fn measure(&self, keypoints: &[Keypoint]) -> Result<f64, GeometryError> {
        let at = |landmark: KeypointIndex| {
            landmark
                .lookup(keypoints)
                .ok_or(GeometryError::LandmarkOutOfRange(landmark))
        };
        match *self {
            Self::Joint {
                first,
                vertex,
                last,
            } => geometry::angle(at(first)?, at(vertex)?, at(last)?),
            Self::FromVertical {
                from,
                vertex,
                direction,
            } => geometry::angle_from_vertical(at(from)?, at(vertex)?, direction),
        }
    }
}

/// Which side(s) of the body a check reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Laterality {
    /// Both sides, stricter band wins
    Bilateral,
    /// Left side only
    Left,
    /// Right side only
    Right,
    /// Whichever side the camera sees best, chosen once per frame
    Selected,
}

/// One end of the good band and the message for crossing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    /// Threshold in degrees
    pub degrees: f64,
    /// Message when the angle falls beyond this threshold
    pub message: String,
}

/// Three-band classification of one angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleCheck {
    /// Stable name used in cues and symmetry rules
    pub name: String,
    /// How the angle is measured, written for the left side
    pub angle: AngleDefinition,
    /// Which side(s) are measured
    pub laterality: Laterality,
    /// Lower limit; absent when the low band cannot occur
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Limit>,
    /// Upper limit; absent when the high band cannot occur
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Limit>,
    /// Message when the angle is within limits
    pub good: String,
}

impl AngleCheck {
    /// Start a check with no limits
    #[must_use]
    pub fn new(name: impl Into<String>, angle: AngleDefinition, laterality: Laterality) -> Self {
        Self {
            name: name.into(),
            angle,
            laterality,
            low: None,
            high: None,
            good: String::new(),
        }
    }

    /// Set the lower limit
    #[must_use]
    pub fn too_low(mut self, degrees: f64, message: impl Into<String>) -> Self {
        self.low = Some(Limit {
            degrees,
            message: message.into(),
        });
        self
    }

    /// Set the upper limit
    #[must_use]
    pub fn too_high(mut self, degrees: f64, message: impl Into<String>) -> Self {
        self.high = Some(Limit {
            degrees,
            message: message.into(),
        });
        self
    }

    /// Set the in-band message
    #[must_use]
    pub fn good(mut self, message: impl Into<String>) -> Self {
        self.good = message.into();
        self
    }

    /// Band for a measured angle; limits themselves are inside the good band
    #[must_use]
    pub fn classify(&self, degrees: f64) -> Band {
        if self.low.as_ref().is_some_and(|limit| degrees < limit.degrees) {
            Band::TooLow
        } else if self.high.as_ref().is_some_and(|limit| degrees > limit.degrees) {
            Band::TooHigh
        } else {
            Band::Good
        }
    }

    /// Message for a band
    #[must_use]
    pub fn message(&self, band: Band) -> &str {
        let limit = match band {
            Band::TooLow => self.low.as_ref(),
            Band::TooHigh => self.high.as_ref(),
            Band::Good => None,
        };
        limit.map_or(self.good.as_str(), |limit| limit.message.as_str())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingField("check name".to_owned()));
        }
        if self.good.trim().is_empty() {
            return Err(ConfigError::MissingField(format!(
                "good message for check '{}'",
                self.name
            )));
        }
        for limit in self.low.iter().chain(self.high.iter()) {
            if !limit.degrees.is_finite() || !(0.0..=MAX_DEGREES).contains(&limit.degrees) {
                return Err(ConfigError::InvalidRange(format!(
                    "limit {} of check '{}' must be within 0-180 degrees",
                    limit.degrees, self.name
                )));
            }
            if limit.message.trim().is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "limit message for check '{}'",
                    self.name
                )));
            }
        }
        if let (Some(low), Some(high)) = (&self.low, &self.high) {
            if low.degrees > high.degrees {
                return Err(ConfigError::InvalidRange(format!(
                    "check '{}' has low limit {} above high limit {}",
                    self.name, low.degrees, high.degrees
                )));
            }
        }
        Ok(())
    }
}

/// Left/right disagreement limit for one bilateral check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryCheck {
    /// Name of a bilateral [`AngleCheck`]
    pub check: String,
    /// Largest tolerated difference in degrees
    pub max_difference: f64,
    /// Message when the sides differ by more than `max_difference`
    pub message: String,
}

/// Symmetry checks, evaluated in order after all band checks
///
/// Only the first disagreement is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryRules {
    /// Ordered symmetry checks
    pub checks: Vec<SymmetryCheck>,
    /// Message when every check agrees; no message when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balanced: Option<String>,
}

/// Complete rule table for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRules {
    /// Message when a required landmark was not detected
    pub reposition_message: String,
    /// Band checks in emission order
    pub checks: Vec<AngleCheck>,
    /// Optional left/right agreement checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry: Option<SymmetryRules>,
}

impl ExerciseRules {
    /// Landmarks needed regardless of which side is selected
    #[must_use]
    pub fn fixed_landmarks(&self) -> Vec<KeypointIndex> {
        let mut landmarks = Vec::new();
        for check in &self.checks {
            let sides: &[Side] = match check.laterality {
                Laterality::Bilateral => &[Side::Left, Side::Right],
                Laterality::Left => &[Side::Left],
                Laterality::Right => &[Side::Right],
                Laterality::Selected => &[],
            };
            for &side in sides {
                push_unique(&mut landmarks, check.angle.on_side(side).landmarks());
            }
        }
        landmarks
    }

    /// Landmarks read by side-selected checks when evaluated on `side`
    #[must_use]
    pub fn selected_landmarks(&self, side: Side) -> Vec<KeypointIndex> {
        let mut landmarks = Vec::new();
        for check in &self.checks {
            if check.laterality == Laterality::Selected {
                push_unique(&mut landmarks, check.angle.on_side(side).landmarks());
            }
        }
        landmarks
    }

    /// Whether any check needs a per-frame side choice
    #[must_use]
    pub fn uses_side_selection(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.laterality == Laterality::Selected)
    }

    /// Look a check up by name
    #[must_use]
    pub fn check(&self, name: &str) -> Option<&AngleCheck> {
        self.checks.iter().find(|check| check.name == name)
    }

    /// Validate limits, messages, and symmetry references
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reposition_message.trim().is_empty() {
            return Err(ConfigError::MissingField("reposition_message".to_owned()));
        }
        if self.checks.is_empty() {
            return Err(ConfigError::MissingField("checks".to_owned()));
        }
        for (position, check) in self.checks.iter().enumerate() {
            check.validate()?;
            if self.checks[..position]
                .iter()
                .any(|earlier| earlier.name == check.name)
            {
                return Err(ConfigError::InvalidRange(format!(
                    "check name '{}' is used twice",
                    check.name
                )));
            }
        }
        if let Some(symmetry) = &self.symmetry {
            for rule in &symmetry.checks {
                match self.check(&rule.check) {
                    Some(check) if check.laterality == Laterality::Bilateral => {}
                    _ => return Err(ConfigError::UnknownCheck(rule.check.clone())),
                }
                if !rule.max_difference.is_finite() || rule.max_difference < 0.0 {
                    return Err(ConfigError::ValueOutOfRange(format!(
                        "symmetry limit for '{}' must be a non-negative number",
                        rule.check
                    )));
                }
            }
        }
        Ok(())
    }
}

fn push_unique(target: &mut Vec<KeypointIndex>, landmarks: Vec<KeypointIndex>) {
    for landmark in landmarks {
        if !target.contains(&landmark) {
            target.push(landmark);
        }
    }
}
