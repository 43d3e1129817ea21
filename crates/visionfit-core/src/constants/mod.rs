// ABOUTME: Pose frame sizing and landmark index constants
// ABOUTME: Encodes the fixed anatomical index convention of the external pose model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pose Constants
//!
//! The external pose-estimation subsystem emits a fixed-size ordered sequence
//! of body keypoints per video frame. The index of each keypoint is a fixed
//! contract with that subsystem and must not be altered here.

/// Number of landmarks in one complete pose frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Positional indices into a pose frame.
///
/// Only the indices consumed by the exercise counters are named; the frame
/// still carries all 33 entries of the upstream convention.
pub mod landmark_indices {
    /// Nose keypoint
    pub const NOSE: usize = 0;
    /// Left shoulder keypoint
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder keypoint
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left elbow keypoint
    pub const LEFT_ELBOW: usize = 13;
    /// Right elbow keypoint
    pub const RIGHT_ELBOW: usize = 14;
    /// Left wrist keypoint
    pub const LEFT_WRIST: usize = 15;
    /// Right wrist keypoint
    pub const RIGHT_WRIST: usize = 16;
    /// Left hip keypoint
    pub const LEFT_HIP: usize = 23;
    /// Right hip keypoint
    pub const RIGHT_HIP: usize = 24;
    /// Left knee keypoint
    pub const LEFT_KNEE: usize = 25;
    /// Right knee keypoint
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle keypoint
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle keypoint
    pub const RIGHT_ANKLE: usize = 28;
}
