// ABOUTME: Lunge threshold table for front knee, back knee, and torso position
// ABOUTME: The subject's left leg is the front leg; both knees sit near 90 degrees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::constants::messages::REPOSITION_LEGS;
use formcoach_core::models::KeypointIndex;

use crate::config::{AngleCheck, AngleDefinition, ExerciseRules, Laterality};

const KNEE: AngleDefinition = AngleDefinition::Joint {
    first: KeypointIndex::LeftHip,
    vertex: KeypointIndex::LeftKnee,
    last: KeypointIndex::LeftAnkle,
};

/// Lunge rule table
#[must_use]
pub fn rules() -> ExerciseRules {
    ExerciseRules {
        reposition_message: REPOSITION_LEGS.to_owned(),
        checks: vec![
            AngleCheck::new("front_knee", KNEE, Laterality::Left)
                .too_low(
                    75.0,
                    "Great depth! Try coming up slightly to protect your front knee",
                )
                .too_high(
                    105.0,
                    "You're doing well! Try lowering your front leg a bit more",
                )
                .good("Perfect front leg position! Keep it up! 💪"),
            AngleCheck::new("back_knee", KNEE, Laterality::Right)
                .too_low(80.0, "Try lifting your back knee a bit higher")
                .too_high(110.0, "Lower your back knee for better stability")
                .good("Excellent back leg position! 👍"),
            // Torso against the front thigh: ~90 degrees when upright over a level thigh
            AngleCheck::new(
                "torso",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftShoulder,
                    vertex: KeypointIndex::LeftHip,
                    last: KeypointIndex::LeftKnee,
                },
                Laterality::Left,
            )
            .too_low(70.0, "Try keeping your chest more upright")
            .too_high(110.0, "Lean forward slightly for better balance")
            .good("Perfect torso position! Great control! ⭐"),
        ],
        symmetry: None,
    }
}
