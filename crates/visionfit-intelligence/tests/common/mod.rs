// ABOUTME: Shared pose-frame fixtures for the form-analysis test suites
// ABOUTME: Builds frames with controlled joint angles and spread ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)] // each test binary uses its own subset of fixtures

use visionfit_core::constants::{landmark_indices as idx, POSE_LANDMARK_COUNT};
use visionfit_core::models::{Landmark, PoseFrame};

/// Body-height in normalized units used by the jumping-jack fixtures
pub const FIXTURE_BODY_HEIGHT: f64 = 0.8;

/// A full 33-landmark frame with every keypoint at the frame center
pub fn neutral_frame() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5); POSE_LANDMARK_COUNT]
}

/// Landmark at a polar offset from a center point
pub fn polar(center: (f64, f64), angle_deg: f64, radius: f64) -> Landmark {
    let radians = angle_deg.to_radians();
    Landmark::new(
        radius.mul_add(radians.cos(), center.0),
        radius.mul_add(radians.sin(), center.1),
    )
}

/// Frame whose left and right elbow joints both read `arm_angle_deg` degrees,
/// with shoulders and hips level so body alignment scores 100.
pub fn pushup_frame(arm_angle_deg: f64) -> Vec<Landmark> {
    let mut landmarks = neutral_frame();
    let left_elbow = (0.4, 0.5);
    let right_elbow = (0.6, 0.5);

    landmarks[idx::LEFT_ELBOW] = Landmark::new(left_elbow.0, left_elbow.1);
    landmarks[idx::LEFT_SHOULDER] = polar(left_elbow, 180.0, 0.15);
    landmarks[idx::LEFT_WRIST] = polar(left_elbow, 180.0 - arm_angle_deg, 0.15);

    landmarks[idx::RIGHT_ELBOW] = Landmark::new(right_elbow.0, right_elbow.1);
    landmarks[idx::RIGHT_SHOULDER] = polar(right_elbow, 0.0, 0.15);
    landmarks[idx::RIGHT_WRIST] = polar(right_elbow, arm_angle_deg, 0.15);

    // hip center level with the shoulder center
    landmarks[idx::LEFT_HIP] = Landmark::new(0.45, 0.5);
    landmarks[idx::RIGHT_HIP] = Landmark::new(0.55, 0.5);

    landmarks
}

/// Frame whose left and right knee joints both read `knee_angle_deg` degrees
pub fn squat_frame(knee_angle_deg: f64) -> Vec<Landmark> {
    let mut landmarks = neutral_frame();
    let left_knee = (0.4, 0.5);
    let right_knee = (0.6, 0.5);

    landmarks[idx::LEFT_KNEE] = Landmark::new(left_knee.0, left_knee.1);
    landmarks[idx::LEFT_HIP] = polar(left_knee, -90.0, 0.2);
    landmarks[idx::LEFT_ANKLE] = polar(left_knee, knee_angle_deg - 90.0, 0.2);

    landmarks[idx::RIGHT_KNEE] = Landmark::new(right_knee.0, right_knee.1);
    landmarks[idx::RIGHT_HIP] = polar(right_knee, -90.0, 0.2);
    landmarks[idx::RIGHT_ANKLE] = polar(right_knee, knee_angle_deg - 90.0, 0.2);

    landmarks
}

/// Frame producing the given arm and leg spread ratios.
///
/// Nose and ankles are placed `FIXTURE_BODY_HEIGHT` apart vertically, so a
/// spread of `ratio * FIXTURE_BODY_HEIGHT` yields exactly `ratio`.
pub fn jumping_jack_frame(arm_ratio: f64, leg_ratio: f64) -> Vec<Landmark> {
    let mut landmarks = neutral_frame();
    landmarks[idx::NOSE] = Landmark::new(0.5, 0.1);

    let arm_spread = arm_ratio * FIXTURE_BODY_HEIGHT;
    landmarks[idx::LEFT_WRIST] = Landmark::new(0.5 - arm_spread / 2.0, 0.3);
    landmarks[idx::RIGHT_WRIST] = Landmark::new(0.5 + arm_spread / 2.0, 0.3);

    let leg_spread = leg_ratio * FIXTURE_BODY_HEIGHT;
    landmarks[idx::LEFT_ANKLE] = Landmark::new(0.5 - leg_spread / 2.0, 0.9);
    landmarks[idx::RIGHT_ANKLE] = Landmark::new(0.5 + leg_spread / 2.0, 0.9);

    landmarks
}

/// Validated frame from a landmark fixture
pub fn pose_frame(landmarks: Vec<Landmark>) -> PoseFrame {
    PoseFrame::new(landmarks).expect("fixture frames carry all 33 landmarks")
}
