// ABOUTME: Fixed feedback strings for missing, incomplete, degenerate, and unsupported input
// ABOUTME: These strings are part of the client wire contract and must not change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Returned when a request carries no keypoints at all
pub const NOT_VISIBLE: &str = "not visible in camera";

/// Returned when the exercise tag is not one of the supported exercises
pub const EXERCISE_NOT_SUPPORTED: &str = "exercise type not supported";

/// Returned when the frame has fewer keypoints than the 17-point layout
pub const FULL_BODY_NOT_VISIBLE: &str = "Let's make sure your full body is visible in the camera";

/// Returned when angle math hits coincident points or non-finite coordinates
pub const ADJUST_POSITION: &str = "Let's adjust your position so I can see your form better";

/// Reposition message when leg landmarks are missing
pub const REPOSITION_LEGS: &str = "Try adjusting your position so I can see your legs better";

/// Reposition message when arm landmarks are missing
pub const REPOSITION_ARMS: &str = "Try adjusting your position so I can see your arms better";

/// Reposition message when whole-body landmarks are missing
pub const REPOSITION_BODY: &str =
    "Try adjusting your position so I can see your whole body from the side";
