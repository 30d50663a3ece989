// ABOUTME: Squat threshold table covering depth, hip hinge, shin angle, and knee symmetry
// ABOUTME: Parallel squat sits near 90 degrees of knee flexion with a 30-60 degree torso lean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::constants::messages::REPOSITION_LEGS;
use formcoach_core::models::KeypointIndex;

use crate::config::{
    AngleCheck, AngleDefinition, ExerciseRules, Laterality, SymmetryCheck, SymmetryRules,
};
use crate::geometry::VerticalDirection;

/// Knee depth band
pub const KNEE_MIN_DEGREES: f64 = 70.0;
/// Knee depth band
pub const KNEE_MAX_DEGREES: f64 = 120.0;
/// Torso lean band, measured from vertical at the hip
pub const HIP_HINGE_MIN_DEGREES: f64 = 30.0;
/// Torso lean band, measured from vertical at the hip
pub const HIP_HINGE_MAX_DEGREES: f64 = 60.0;
/// Forward shin travel band, measured from vertical at the knee
pub const SHIN_MIN_DEGREES: f64 = 10.0;
/// Forward shin travel band, measured from vertical at the knee
pub const SHIN_MAX_DEGREES: f64 = 25.0;
/// Largest tolerated left/right knee angle difference
pub const KNEE_SYMMETRY_DEGREES: f64 = 15.0;

/// Squat rule table
#[must_use]
pub fn rules() -> ExerciseRules {
    ExerciseRules {
        reposition_message: REPOSITION_LEGS.to_owned(),
        checks: vec![
            AngleCheck::new(
                "knee",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftHip,
                    vertex: KeypointIndex::LeftKnee,
                    last: KeypointIndex::LeftAnkle,
                },
                Laterality::Bilateral,
            )
            .too_low(
                KNEE_MIN_DEGREES,
                "Great depth! Try coming up a bit to protect your knees",
            )
            .too_high(
                KNEE_MAX_DEGREES,
                "You're doing great! Try bending your knees a bit more for better form",
            )
            .good("Perfect squat depth! Keep it up! 💪"),
            AngleCheck::new(
                "hip_hinge",
                AngleDefinition::FromVertical {
                    from: KeypointIndex::LeftShoulder,
                    vertex: KeypointIndex::LeftHip,
                    direction: VerticalDirection::Up,
                },
                Laterality::Bilateral,
            )
            .too_low(
                HIP_HINGE_MIN_DEGREES,
                "Nice core engagement! Try hinging at your hips a bit more",
            )
            .too_high(
                HIP_HINGE_MAX_DEGREES,
                "Try lifting your chest while keeping your core tight",
            )
            .good("Excellent back position! 👍"),
            AngleCheck::new(
                "shin",
                AngleDefinition::FromVertical {
                    from: KeypointIndex::LeftAnkle,
                    vertex: KeypointIndex::LeftKnee,
                    direction: VerticalDirection::Down,
                },
                Laterality::Bilateral,
            )
            .too_low(
                SHIN_MIN_DEGREES,
                "Looking good! Allow your knees to track forward a bit more",
            )
            .too_high(
                SHIN_MAX_DEGREES,
                "Small adjustment needed - try keeping your shins more vertical",
            )
            .good("Perfect shin angle - you've got this! ⭐"),
        ],
        symmetry: Some(SymmetryRules {
            checks: vec![SymmetryCheck {
                check: "knee".to_owned(),
                max_difference: KNEE_SYMMETRY_DEGREES,
                message: "Try to keep your weight even on both legs".to_owned(),
            }],
            balanced: None,
        }),
    }
}
