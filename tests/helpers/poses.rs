// ABOUTME: Synthetic 17-point pose builders with known joint angles
// ABOUTME: Lets tests state poses in degrees instead of hand-placed pixel coordinates

#![allow(dead_code)]

use formcoach_core::models::{Keypoint, KeypointIndex, Side};

/// Vertical midline of every generated pose
pub const CENTER_X: f64 = 320.0;

const SHIN: f64 = 100.0;
const THIGH: f64 = 110.0;
const TORSO: f64 = 150.0;
const UPPER_ARM: f64 = 70.0;
const FOREARM: f64 = 60.0;

/// Point `length` pixels from `origin` in image direction `degrees`
///
/// 0 points right, 90 points down, 270 points up.
pub fn polar(origin: Keypoint, length: f64, degrees: f64) -> Keypoint {
    let radians = degrees.to_radians();
    Keypoint::at(
        length.mul_add(radians.cos(), origin.x),
        length.mul_add(radians.sin(), origin.y),
    )
}

/// Reflect a point across the pose midline
pub fn mirror(point: Keypoint) -> Keypoint {
    Keypoint::new(2.0f64.mul_add(CENTER_X, -point.x), point.y, point.confidence)
}

/// Swap every left landmark with its right counterpart
pub fn swap_sides(frame: &[Keypoint]) -> Vec<Keypoint> {
    KeypointIndex::ALL
        .iter()
        .map(|landmark| frame[landmark.mirrored().position()])
        .collect()
}

/// Overwrite one landmark
pub fn with_point(
    mut frame: Vec<Keypoint>,
    landmark: KeypointIndex,
    point: Keypoint,
) -> Vec<Keypoint> {
    frame[landmark.position()] = point;
    frame
}

/// Left-side landmarks placed by a builder, mirrored to the right side
fn symmetric(left: &[(KeypointIndex, Keypoint)], shoulder_y: f64) -> Vec<Keypoint> {
    let mut frame = vec![Keypoint::missing(); KeypointIndex::COUNT];
    frame[KeypointIndex::Nose.position()] = Keypoint::at(CENTER_X, shoulder_y - 45.0);
    for &(landmark, point) in left {
        frame[landmark.position()] = point;
        frame[landmark.on_side(Side::Right).position()] = mirror(point);
    }
    frame
}

fn head(shoulder_y: f64) -> [(KeypointIndex, Keypoint); 2] {
    [
        (KeypointIndex::LeftEye, Keypoint::at(CENTER_X - 8.0, shoulder_y - 52.0)),
        (KeypointIndex::LeftEar, Keypoint::at(CENTER_X - 18.0, shoulder_y - 48.0)),
    ]
}

/// Symmetric squat seen from the front
///
/// `knee` is the hip-knee-ankle angle, `hip_lean` the torso's lean from
/// vertical, `shin` the shin's lean from vertical.
pub fn squat(knee: f64, hip_lean: f64, shin: f64) -> Vec<Keypoint> {
    let ankle = Keypoint::at(CENTER_X - 80.0, 420.0);
    let knee_point = polar(ankle, SHIN, 270.0 + shin);
    let hip = polar(knee_point, THIGH, 90.0 + shin + knee);
    let shoulder = polar(hip, TORSO, 270.0 + hip_lean);
    let elbow = polar(shoulder, UPPER_ARM, 95.0);
    let wrist = polar(elbow, FOREARM, 95.0);

    let mut left = vec![
        (KeypointIndex::LeftShoulder, shoulder),
        (KeypointIndex::LeftElbow, elbow),
        (KeypointIndex::LeftWrist, wrist),
        (KeypointIndex::LeftHip, hip),
        (KeypointIndex::LeftKnee, knee_point),
        (KeypointIndex::LeftAnkle, ankle),
    ];
    left.extend(head(shoulder.y));
    symmetric(&left, shoulder.y)
}

/// Squat with good form on every check
pub fn good_squat() -> Vec<Keypoint> {
    squat(95.0, 40.0, 15.0)
}

/// Lunge seen from the side, front leg on the left landmarks
///
/// `front_knee` and `back_knee` are hip-knee-ankle angles; `torso` is the
/// shoulder-hip-knee angle over the front leg.
pub fn lunge(front_knee: f64, back_knee: f64, torso: f64) -> Vec<Keypoint> {
    let mut frame = vec![Keypoint::missing(); KeypointIndex::COUNT];

    let front_ankle = Keypoint::at(420.0, 420.0);
    let front_knee_point = polar(front_ankle, SHIN, 270.0);
    let hip = polar(front_knee_point, THIGH, 90.0 + front_knee);
    let shoulder = polar(hip, TORSO, 270.0 + front_knee - torso);

    let back_hip = hip.offset(4.0, 0.0);
    let back_knee_point = polar(back_hip, THIGH, 100.0);
    let back_ankle = polar(back_knee_point, SHIN, 280.0 - back_knee);

    let points = [
        (KeypointIndex::Nose, shoulder.offset(12.0, -45.0)),
        (KeypointIndex::LeftEye, shoulder.offset(8.0, -52.0)),
        (KeypointIndex::RightEye, shoulder.offset(10.0, -52.0)),
        (KeypointIndex::LeftEar, shoulder.offset(-4.0, -48.0)),
        (KeypointIndex::RightEar, shoulder.offset(-2.0, -48.0)),
        (KeypointIndex::LeftShoulder, shoulder),
        (KeypointIndex::RightShoulder, shoulder.offset(4.0, 0.0)),
        (KeypointIndex::LeftElbow, shoulder.offset(0.0, 70.0)),
        (KeypointIndex::RightElbow, shoulder.offset(4.0, 70.0)),
        (KeypointIndex::LeftWrist, shoulder.offset(0.0, 130.0)),
        (KeypointIndex::RightWrist, shoulder.offset(4.0, 130.0)),
        (KeypointIndex::LeftHip, hip),
        (KeypointIndex::RightHip, back_hip),
        (KeypointIndex::LeftKnee, front_knee_point),
        (KeypointIndex::RightKnee, back_knee_point),
        (KeypointIndex::LeftAnkle, front_ankle),
        (KeypointIndex::RightAnkle, back_ankle),
    ];
    for (landmark, point) in points {
        frame[landmark.position()] = point;
    }
    frame
}

/// Arm raise seen from the front with straight arms
///
/// Elevations are hip-shoulder-wrist angles: 0 with arms at the sides,
/// 180 with arms straight overhead.
pub fn arm_raise(left_elevation: f64, right_elevation: f64) -> Vec<Keypoint> {
    let mut frame = arm_side(left_elevation);
    let right = arm_side(right_elevation);
    for landmark in KeypointIndex::ALL {
        if landmark.side() == Some(Side::Right) {
            frame[landmark.position()] = mirror(right[landmark.mirrored().position()]);
        }
    }
    frame
}

fn arm_side(elevation: f64) -> Vec<Keypoint> {
    let shoulder = Keypoint::at(CENTER_X - 40.0, 200.0);
    let hip = Keypoint::at(CENTER_X - 30.0, 330.0);
    let down = (hip.y - shoulder.y).atan2(hip.x - shoulder.x).to_degrees();
    let direction = down + elevation;
    let elbow = polar(shoulder, UPPER_ARM, direction);
    let wrist = polar(elbow, FOREARM, direction);
    let knee = Keypoint::at(CENTER_X - 30.0, 440.0);
    let ankle = Keypoint::at(CENTER_X - 30.0, 540.0);

    let mut left = vec![
        (KeypointIndex::LeftShoulder, shoulder),
        (KeypointIndex::LeftElbow, elbow),
        (KeypointIndex::LeftWrist, wrist),
        (KeypointIndex::LeftHip, hip),
        (KeypointIndex::LeftKnee, knee),
        (KeypointIndex::LeftAnkle, ankle),
    ];
    left.extend(head(shoulder.y));
    symmetric(&left, shoulder.y)
}

/// Side-view plank with only the left side detected
///
/// `hip_drop` pushes the hip below the shoulder-ankle line, in pixels.
pub fn plank(hip_drop: f64) -> Vec<Keypoint> {
    let mut frame = vec![Keypoint::missing(); KeypointIndex::COUNT];
    let points = [
        (KeypointIndex::Nose, Keypoint::at(140.0, 200.0)),
        (KeypointIndex::LeftEye, Keypoint::at(145.0, 192.0)),
        (KeypointIndex::LeftEar, Keypoint::at(150.0, 190.0)),
        (KeypointIndex::LeftShoulder, Keypoint::at(200.0, 200.0)),
        (KeypointIndex::LeftElbow, Keypoint::at(200.0, 300.0)),
        (KeypointIndex::LeftWrist, Keypoint::at(260.0, 300.0)),
        (KeypointIndex::LeftHip, Keypoint::at(350.0, 205.0 + hip_drop)),
        (KeypointIndex::LeftKnee, Keypoint::at(450.0, 210.0)),
        (KeypointIndex::LeftAnkle, Keypoint::at(550.0, 215.0)),
    ];
    for (landmark, point) in points {
        frame[landmark.position()] = point;
    }
    frame
}
