// ABOUTME: Pose fixtures for benchmarks
// ABOUTME: Generates deterministic 17-point frames for each supported exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formcoach_core::models::{Keypoint, KeypointIndex};

/// Frame with every landmark placed on a gently varying standing pose
///
/// `jitter` shifts joints by a few pixels so consecutive frames differ.
#[must_use]
pub fn standing_frame(jitter: f64) -> Vec<Keypoint> {
    let layout: [(f64, f64); KeypointIndex::COUNT] = [
        (320.0, 80.0),
        (312.0, 72.0),
        (328.0, 72.0),
        (302.0, 76.0),
        (338.0, 76.0),
        (280.0, 130.0),
        (360.0, 130.0),
        (270.0, 200.0),
        (370.0, 200.0),
        (265.0, 260.0),
        (375.0, 260.0),
        (290.0, 270.0),
        (350.0, 270.0),
        (300.0, 360.0),
        (340.0, 360.0),
        (290.0, 450.0),
        (350.0, 450.0),
    ];
    layout
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let wobble = jitter * ((i % 5) as f64 - 2.0);
            Keypoint::new(x + wobble, y - wobble, 0.9)
        })
        .collect()
}

/// A clip of `count` frames with varying jitter
#[must_use]
pub fn clip(count: usize) -> Vec<Vec<Keypoint>> {
    (0..count)
        .map(|frame| standing_frame((frame % 7) as f64))
        .collect()
}
