// ABOUTME: Core data models for the formcoach feedback engine
// ABOUTME: Re-exports Keypoint, KeypointIndex, Side and ExerciseType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are ephemeral: they are produced fresh for one evaluation by the
//! pose-estimation collaborator and discarded when feedback is returned.
//!
//! - `Keypoint`: one landmark position with detection confidence
//! - `KeypointIndex`: the fixed 17-point landmark schema
//! - `Side`: body laterality used when mirroring landmarks
//! - `ExerciseType`: the closed set of supported exercises

mod exercise;
mod keypoint;

pub use exercise::{ExerciseType, UnknownExercise};
pub use keypoint::{Keypoint, KeypointFormatError, KeypointIndex, Side};
