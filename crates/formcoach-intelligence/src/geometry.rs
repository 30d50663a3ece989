// ABOUTME: Joint angle computation from three pose landmarks using the law of cosines
// ABOUTME: Guards coincident points and clamps the cosine domain so math never faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Joint angle geometry
//!
//! Angles are interior angles in degrees, always within `[0, 180]`. Only the
//! `x`/`y` coordinates take part; confidence is ignored.

use formcoach_core::constants::pose::VERTICAL_REFERENCE_OFFSET;
use formcoach_core::models::{Keypoint, KeypointIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an angle cannot be computed
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Two of the three points coincide, leaving a zero-length side
    #[error("degenerate geometry: zero-length side")]
    Degenerate,

    /// A coordinate or intermediate length is NaN or infinite
    #[error("non-finite coordinate in angle computation")]
    NonFinite,

    /// The keypoint array has no entry for a landmark
    #[error("landmark {0:?} is not present in the keypoint array")]
    LandmarkOutOfRange(KeypointIndex),
}

/// Direction of the synthetic reference point used for angles against vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalDirection {
    /// Toward the top of the image
    Up,
    /// Toward the bottom of the image
    Down,
}

/// Interior angle at `vertex` formed by the rays toward `first` and `last`
///
/// Uses the law of cosines with `a = |vertex - last|`, `b = |first - last|`
/// and `c = |first - vertex|`. Side lengths are scaled by the longest side
/// before squaring so large coordinates cannot overflow.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] when any two of the three points
/// coincide, and [`GeometryError::NonFinite`] for NaN or infinite input.
pub fn angle(first: &Keypoint, vertex: &Keypoint, last: &Keypoint) -> Result<f64, GeometryError> {
    let a = distance(vertex, last);
    let b = distance(first, last);
    let c = distance(first, vertex);

    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(GeometryError::Degenerate);
    }

    let longest = a.max(b).max(c);
    let (a, b, c) = (a / longest, b / longest, c / longest);
    let numerator = a.mul_add(a, c.mul_add(c, -(b * b)));
    let denominator = 2.0 * a * c;
    if !numerator.is_finite() || !denominator.is_normal() {
        return Err(GeometryError::NonFinite);
    }

    // Rounding can push the ratio a hair outside acos' domain
    let cosine = (numerator / denominator).clamp(-1.0, 1.0);
    Ok(cosine.acos().to_degrees())
}

/// Angle at `vertex` between the segment toward `from` and image vertical
///
/// `Up` measures against the direction of decreasing `y`, so an upright torso
/// measured at the hip reads 0°.
///
/// The synthetic reference point sits at least twice the segment length from
/// the vertex, so it never lands on `from`.
///
/// # Errors
///
/// Same conditions as [`angle`].
pub fn angle_from_vertical(
    from: &Keypoint,
    vertex: &Keypoint,
    direction: VerticalDirection,
) -> Result<f64, GeometryError> {
    let reach = VERTICAL_REFERENCE_OFFSET.max(2.0 * distance(from, vertex));
    let dy = match direction {
        VerticalDirection::Up => -reach,
        VerticalDirection::Down => reach,
    };
    angle(from, vertex, &vertex.offset(0.0, dy))
}

fn distance(p: &Keypoint, q: &Keypoint) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Keypoint {
        Keypoint::at(x, y)
    }

    #[test]
    fn test_equilateral_triangle() {
        let degrees = angle(&point(0.0, 0.0), &point(1.0, 0.0), &point(0.5, 0.866)).unwrap();
        assert!((degrees - 60.0).abs() < 0.01, "got {degrees}");
    }

    #[test]
    fn test_right_angle() {
        let degrees = angle(&point(0.0, 1.0), &point(0.0, 0.0), &point(1.0, 0.0)).unwrap();
        assert!((degrees - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_straight_line_clamps_to_180() {
        let degrees = angle(&point(0.0, 0.0), &point(0.5, 0.0), &point(1.0, 0.0)).unwrap();
        assert!((degrees - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_folded_back_is_zero() {
        let degrees = angle(&point(2.0, 0.0), &point(0.0, 0.0), &point(1.0, 0.0)).unwrap();
        assert!(degrees.abs() < 1e-6);
    }

    #[test]
    fn test_first_equals_vertex_is_degenerate() {
        let result = angle(&point(1.0, 1.0), &point(1.0, 1.0), &point(2.0, 3.0));
        assert_eq!(result, Err(GeometryError::Degenerate));
    }

    #[test]
    fn test_last_equals_vertex_is_degenerate() {
        let result = angle(&point(4.0, 1.0), &point(1.0, 1.0), &point(1.0, 1.0));
        assert_eq!(result, Err(GeometryError::Degenerate));
    }

    #[test]
    fn test_outer_points_coincide_is_degenerate() {
        let result = angle(&point(3.0, 4.0), &point(0.5, 0.5), &point(3.0, 4.0));
        assert_eq!(result, Err(GeometryError::Degenerate));
    }

    #[test]
    fn test_huge_coordinates_keep_their_angle() {
        let folded = angle(&point(2e160, 0.0), &point(0.0, 0.0), &point(1e160, 0.0)).unwrap();
        assert!(folded.abs() < 1e-6, "got {folded}");
        let straight = angle(&point(-1e160, 0.0), &point(0.0, 0.0), &point(1e160, 0.0)).unwrap();
        assert!((straight - 180.0).abs() < 1e-6, "got {straight}");
        let right = angle(&point(0.0, 3e200), &point(0.0, 0.0), &point(4e200, 0.0)).unwrap();
        assert!((right - 90.0).abs() < 1e-9, "got {right}");
    }

    #[test]
    fn test_non_finite_input() {
        let result = angle(&point(f64::NAN, 0.0), &point(0.0, 0.0), &point(1.0, 0.0));
        assert_eq!(result, Err(GeometryError::NonFinite));
        let result = angle(&point(f64::INFINITY, 0.0), &point(0.0, 0.0), &point(1.0, 0.0));
        assert_eq!(result, Err(GeometryError::NonFinite));
    }

    #[test]
    fn test_confidence_is_ignored() {
        let low = angle(
            &Keypoint::new(0.0, 1.0, 0.01),
            &Keypoint::new(0.0, 0.0, 0.2),
            &Keypoint::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert!((low - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_upright_segment_reads_zero_from_vertical() {
        let shoulder = point(100.0, 100.0);
        let hip = point(100.0, 300.0);
        let degrees = angle_from_vertical(&shoulder, &hip, VerticalDirection::Up).unwrap();
        assert!(degrees.abs() < 1e-9);
    }

    #[test]
    fn test_vertical_shin_at_reference_length() {
        let knee = point(200.0, 300.0);
        let ankle = point(200.0, 400.0);
        let degrees = angle_from_vertical(&ankle, &knee, VerticalDirection::Down).unwrap();
        assert!(degrees.abs() < 1e-9, "got {degrees}");
    }

    #[test]
    fn test_lean_from_vertical() {
        let hip = point(0.0, 0.0);
        let shoulder = point(100.0, -100.0);
        let degrees = angle_from_vertical(&shoulder, &hip, VerticalDirection::Up).unwrap();
        assert!((degrees - 45.0).abs() < 1e-9);
        let down = angle_from_vertical(&shoulder, &hip, VerticalDirection::Down).unwrap();
        assert!((down - 135.0).abs() < 1e-9);
    }
}
