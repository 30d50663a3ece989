// ABOUTME: Result types produced by the analyzers: bands, cues, and fallbacks
// ABOUTME: Keeps band assignment alongside message text so both can be asserted on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::constants::messages;
use serde::{Deserialize, Serialize};

use crate::validation::FrameIncomplete;

/// Classification bucket for a measured angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below the lower limit
    TooLow,
    /// Within limits (inclusive)
    Good,
    /// Above the upper limit
    TooHigh,
}

impl Band {
    /// Combine the bands of both body sides, keeping the out-of-band result
    ///
    /// `TooLow` on either side wins over `TooHigh`, which wins over `Good`.
    #[must_use]
    pub const fn stricter(self, other: Self) -> Self {
        match (self, other) {
            (Self::TooLow, _) | (_, Self::TooLow) => Self::TooLow,
            (Self::TooHigh, _) | (_, Self::TooHigh) => Self::TooHigh,
            (Self::Good, Self::Good) => Self::Good,
        }
    }
}

/// What a cue reports about the pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "band")]
pub enum Assessment {
    /// Angle classification for one check
    Band(Band),
    /// Left and right sides disagree beyond the symmetry limit
    Asymmetric,
    /// Both sides agree within every symmetry limit
    Balanced,
}

/// One coaching message and the check that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Name of the check in the exercise rule table
    pub check: String,
    /// Classification behind the message
    pub assessment: Assessment,
    /// Human-readable message
    pub message: String,
}

/// Terminal conditions that replace analysis with a single message
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// No keypoints were supplied at all
    NotVisible,
    /// The exercise tag is not supported
    UnsupportedExercise,
    /// The frame is short or a required landmark was not detected
    Reposition {
        /// First validation rule the frame broke
        reason: FrameIncomplete,
        /// Message to show the user
        message: String,
    },
    /// Angle math hit coincident or non-finite points
    DegenerateGeometry,
}

impl Fallback {
    /// Message returned to the client
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotVisible => messages::NOT_VISIBLE,
            Self::UnsupportedExercise => messages::EXERCISE_NOT_SUPPORTED,
            Self::Reposition { message, .. } => message,
            Self::DegenerateGeometry => messages::ADJUST_POSITION,
        }
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Ordered cues, most actionable first
    Cues(Vec<Cue>),
    /// A single fallback message
    Fallback(Fallback),
}

impl Feedback {
    /// Cues produced by a full analysis, empty for fallbacks
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        match self {
            Self::Cues(cues) => cues,
            Self::Fallback(_) => &[],
        }
    }

    /// Fallback reason, if analysis did not run to completion
    #[must_use]
    pub const fn fallback(&self) -> Option<&Fallback> {
        match self {
            Self::Cues(_) => None,
            Self::Fallback(fallback) => Some(fallback),
        }
    }

    /// Band assigned to a named check, if it was classified
    #[must_use]
    pub fn band_of(&self, check: &str) -> Option<Band> {
        self.cues().iter().find_map(|cue| match cue.assessment {
            Assessment::Band(band) if cue.check == check => Some(band),
            _ => None,
        })
    }

    /// Messages in emission order
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Cues(cues) => cues.into_iter().map(|cue| cue.message).collect(),
            Self::Fallback(fallback) => vec![fallback.message().to_owned()],
        }
    }
}
