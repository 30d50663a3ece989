// ABOUTME: Exercise type enumeration for pose feedback dispatch
// ABOUTME: Parses the client wire tags (squat, lunge, armRaise, plank) into a closed enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Exercises the feedback engine knows how to coach
///
/// The set is closed: adding an exercise means adding a variant here, which
/// forces every dispatch `match` in the workspace to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseType {
    /// Bodyweight squat
    Squat,
    /// Forward lunge
    Lunge,
    /// Overhead arm raise
    #[serde(alias = "arm_raise")]
    ArmRaise,
    /// Forearm plank, filmed from the side
    Plank,
}

impl ExerciseType {
    /// Every supported exercise in menu order
    pub const ALL: [Self; 4] = [Self::Squat, Self::Lunge, Self::ArmRaise, Self::Plank];

    /// Tag used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Lunge => "lunge",
            Self::ArmRaise => "armRaise",
            Self::Plank => "plank",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise tag that does not name a supported exercise
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported exercise type: '{0}'")]
pub struct UnknownExercise(pub String);

impl FromStr for ExerciseType {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squat" => Ok(Self::Squat),
            "lunge" => Ok(Self::Lunge),
            "armRaise" | "arm_raise" => Ok(Self::ArmRaise),
            "plank" => Ok(Self::Plank),
            other => Err(UnknownExercise(other.to_owned())),
        }
    }
}
