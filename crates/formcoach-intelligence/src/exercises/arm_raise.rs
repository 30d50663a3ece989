// ABOUTME: Arm raise threshold table for elbow extension, shoulder height, and arm symmetry
// ABOUTME: Shoulder height is arm elevation at the shoulder, 180 degrees with arms overhead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::constants::messages::REPOSITION_ARMS;
use formcoach_core::models::KeypointIndex;

use crate::config::{
    AngleCheck, AngleDefinition, ExerciseRules, Laterality, SymmetryCheck, SymmetryRules,
};

/// Smallest elbow angle that counts as a straight arm
pub const ARM_EXTENSION_MIN_DEGREES: f64 = 165.0;
/// Smallest hip-shoulder-wrist angle that counts as arms beside the ears
pub const ARM_ELEVATION_MIN_DEGREES: f64 = 160.0;
/// Largest tolerated left/right difference for either arm check
pub const ARM_SYMMETRY_DEGREES: f64 = 10.0;

/// Arm raise rule table
#[must_use]
pub fn rules() -> ExerciseRules {
    ExerciseRules {
        reposition_message: REPOSITION_ARMS.to_owned(),
        checks: vec![
            // Full extension is 180 degrees, so there is no upper band
            AngleCheck::new(
                "arm_extension",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftShoulder,
                    vertex: KeypointIndex::LeftElbow,
                    last: KeypointIndex::LeftWrist,
                },
                Laterality::Bilateral,
            )
            .too_low(
                ARM_EXTENSION_MIN_DEGREES,
                "You're getting there! Try reaching a bit higher 💪",
            )
            .good("Perfect arm extension! Excellent control! ⭐"),
            AngleCheck::new(
                "shoulder_height",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftHip,
                    vertex: KeypointIndex::LeftShoulder,
                    last: KeypointIndex::LeftWrist,
                },
                Laterality::Bilateral,
            )
            .too_low(
                ARM_ELEVATION_MIN_DEGREES,
                "Try raising your arms closer to your ears",
            )
            .good("Perfect shoulder position! 👍"),
        ],
        symmetry: Some(SymmetryRules {
            checks: vec![
                SymmetryCheck {
                    check: "arm_extension".to_owned(),
                    max_difference: ARM_SYMMETRY_DEGREES,
                    message: "Looking good! Try to keep both arms at the same height".to_owned(),
                },
                SymmetryCheck {
                    check: "shoulder_height".to_owned(),
                    max_difference: ARM_SYMMETRY_DEGREES,
                    message: "Focus on raising both shoulders equally".to_owned(),
                },
            ],
            balanced: Some("Excellent symmetry between arms! ⭐".to_owned()),
        }),
    }
}
