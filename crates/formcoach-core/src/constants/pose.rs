// ABOUTME: Pose layout and geometry constants shared by the engine and its tests
// ABOUTME: Covers the 17-point landmark count and the vertical reference offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Number of landmarks in the standard 17-point pose layout
pub const KEYPOINT_COUNT: usize = 17;

/// Distance in pixels of the synthetic point used for angles against image vertical
pub const VERTICAL_REFERENCE_OFFSET: f64 = 100.0;

/// Confidence assumed when the pose model omits the third component
pub const DEFAULT_CONFIDENCE: f64 = 1.0;
