// ABOUTME: Canonical threshold tables for every supported exercise
// ABOUTME: Each module returns an ExerciseRules value consumed by the shared analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default exercise rule tables
//!
//! Angles are written for the subject's left side. Image `y` grows downward,
//! so "up" in these tables means toward the top of the frame.

/// Overhead arm raise
pub mod arm_raise;
/// Forward lunge
pub mod lunge;
/// Forearm plank
pub mod plank;
/// Bodyweight squat
pub mod squat;
