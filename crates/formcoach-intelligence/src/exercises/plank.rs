// ABOUTME: Plank threshold table for body line, legs, elbow stack, and neck position
// ABOUTME: Planks are filmed side-on, so the better-visible side is measured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::constants::messages::REPOSITION_BODY;
use formcoach_core::models::KeypointIndex;

use crate::config::{AngleCheck, AngleDefinition, ExerciseRules, Laterality};
use crate::geometry::VerticalDirection;

/// Plank rule table
#[must_use]
pub fn rules() -> ExerciseRules {
    ExerciseRules {
        reposition_message: REPOSITION_BODY.to_owned(),
        checks: vec![
            AngleCheck::new(
                "body_line",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftShoulder,
                    vertex: KeypointIndex::LeftHip,
                    last: KeypointIndex::LeftAnkle,
                },
                Laterality::Selected,
            )
            .too_low(
                160.0,
                "Keep your body in one straight line from shoulders to heels",
            )
            .good("Strong, straight body line! 💪"),
            AngleCheck::new(
                "legs",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftHip,
                    vertex: KeypointIndex::LeftKnee,
                    last: KeypointIndex::LeftAnkle,
                },
                Laterality::Selected,
            )
            .too_low(165.0, "Straighten your legs and squeeze your glutes")
            .good("Legs nice and straight 👍"),
            AngleCheck::new(
                "elbow_stack",
                AngleDefinition::FromVertical {
                    from: KeypointIndex::LeftElbow,
                    vertex: KeypointIndex::LeftShoulder,
                    direction: VerticalDirection::Down,
                },
                Laterality::Selected,
            )
            .too_high(20.0, "Stack your elbows directly under your shoulders")
            .good("Great shoulder stack! ⭐"),
            AngleCheck::new(
                "neck",
                AngleDefinition::Joint {
                    first: KeypointIndex::LeftEar,
                    vertex: KeypointIndex::LeftShoulder,
                    last: KeypointIndex::LeftHip,
                },
                Laterality::Selected,
            )
            .too_low(150.0, "Keep your head in line with your spine")
            .good("Neutral neck, nice work!"),
        ],
        symmetry: None,
    }
}
