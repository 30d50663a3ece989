// ABOUTME: Keypoint model and the 17-point landmark index schema
// ABOUTME: Handles the [x, y, confidence] wire form and left/right mirroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::pose::{DEFAULT_CONFIDENCE, KEYPOINT_COUNT};

/// A single landmark estimated by the pose model
///
/// Serialized as a JSON array `[x, y, confidence]`. The pose model may omit
/// the confidence, in which case it defaults to `1.0`. A `null` entry reads
/// as the not-detected sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Option<Vec<f64>>", into = "[f64; 3]")]
pub struct Keypoint {
    /// Horizontal image coordinate
    pub x: f64,
    /// Vertical image coordinate (grows downward)
    pub y: f64,
    /// Detection confidence reported by the pose model
    pub confidence: f64,
}

impl Keypoint {
    /// Create a keypoint with an explicit confidence
    #[must_use]
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Create a fully confident keypoint
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, DEFAULT_CONFIDENCE)
    }

    /// The "not detected" sentinel emitted by the pose model
    #[must_use]
    pub const fn missing() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Whether this keypoint sits exactly at the origin
    #[must_use]
    #[allow(clippy::float_cmp)] // the sentinel is an exact value, not a measurement
    pub fn is_missing(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Same keypoint moved by the given offsets
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.confidence)
    }
}

/// Wire-format error for a keypoint array of the wrong length
#[derive(Debug, Error)]
#[error("keypoint must be [x, y] or [x, y, confidence], got {0} values")]
pub struct KeypointFormatError(pub usize);

impl TryFrom<Option<Vec<f64>>> for Keypoint {
    type Error = KeypointFormatError;

    fn try_from(values: Option<Vec<f64>>) -> Result<Self, Self::Error> {
        match values.as_deref() {
            None => Ok(Self::missing()),
            Some([x, y]) => Ok(Self::at(*x, *y)),
            Some([x, y, confidence]) => Ok(Self::new(*x, *y, *confidence)),
            Some(other) => Err(KeypointFormatError(other.len())),
        }
    }
}

impl From<Keypoint> for [f64; 3] {
    fn from(keypoint: Keypoint) -> Self {
        [keypoint.x, keypoint.y, keypoint.confidence]
    }
}

/// Body side of a bilateral landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Subject's left side
    Left,
    /// Subject's right side
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Position of each landmark in the standard 17-point pose layout
///
/// The pose model contract fixes these positions; they are never validated
/// by name, only by position and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum KeypointIndex {
    /// Nose
    Nose = 0,
    /// Left eye
    LeftEye = 1,
    /// Right eye
    RightEye = 2,
    /// Left ear
    LeftEar = 3,
    /// Right ear
    RightEar = 4,
    /// Left shoulder
    LeftShoulder = 5,
    /// Right shoulder
    RightShoulder = 6,
    /// Left elbow
    LeftElbow = 7,
    /// Right elbow
    RightElbow = 8,
    /// Left wrist
    LeftWrist = 9,
    /// Right wrist
    RightWrist = 10,
    /// Left hip
    LeftHip = 11,
    /// Right hip
    RightHip = 12,
    /// Left knee
    LeftKnee = 13,
    /// Right knee
    RightKnee = 14,
    /// Left ankle
    LeftAnkle = 15,
    /// Right ankle
    RightAnkle = 16,
}

impl KeypointIndex {
    /// Number of landmarks in the layout
    pub const COUNT: usize = KEYPOINT_COUNT;

    /// Every landmark in layout order
    pub const ALL: [Self; KEYPOINT_COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Position of this landmark in a keypoint array
    #[must_use]
    pub const fn position(self) -> usize {
        self as usize
    }

    /// The same landmark on the opposite side of the body
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Nose => Self::Nose,
            Self::LeftEye => Self::RightEye,
            Self::RightEye => Self::LeftEye,
            Self::LeftEar => Self::RightEar,
            Self::RightEar => Self::LeftEar,
            Self::LeftShoulder => Self::RightShoulder,
            Self::RightShoulder => Self::LeftShoulder,
            Self::LeftElbow => Self::RightElbow,
            Self::RightElbow => Self::LeftElbow,
            Self::LeftWrist => Self::RightWrist,
            Self::RightWrist => Self::LeftWrist,
            Self::LeftHip => Self::RightHip,
            Self::RightHip => Self::LeftHip,
            Self::LeftKnee => Self::RightKnee,
            Self::RightKnee => Self::LeftKnee,
            Self::LeftAnkle => Self::RightAnkle,
            Self::RightAnkle => Self::LeftAnkle,
        }
    }

    /// Side of the body, or `None` for the midline nose
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Nose => None,
            Self::LeftEye
            | Self::LeftEar
            | Self::LeftShoulder
            | Self::LeftElbow
            | Self::LeftWrist
            | Self::LeftHip
            | Self::LeftKnee
            | Self::LeftAnkle => Some(Side::Left),
            _ => Some(Side::Right),
        }
    }

    /// This landmark expressed on the requested side
    ///
    /// Midline landmarks are returned unchanged.
    #[must_use]
    pub fn on_side(self, side: Side) -> Self {
        match self.side() {
            Some(current) if current != side => self.mirrored(),
            _ => self,
        }
    }

    /// Look the landmark up in a keypoint array
    #[must_use]
    pub fn lookup(self, keypoints: &[Keypoint]) -> Option<&Keypoint> {
        keypoints.get(self.position())
    }
}
