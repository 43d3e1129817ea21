// ABOUTME: Planar geometry helpers for joint angle and alignment computation
// ABOUTME: Vertex angle formula shared by all exercise counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planar geometry helpers shared by the exercise counters.

use visionfit_core::models::Landmark;

/// Unsigned angle in degrees at `vertex`, formed by `first` and `second`.
///
/// Computed as `|atan2(c.y - b.y, c.x - b.x) - atan2(a.y - b.y, a.x - b.x)|`
/// in degrees, wrapped to `360 - raw` when the raw value exceeds 180. The
/// result is always in `[0, 180]`, and `joint_angle(a, b, c)` equals
/// `joint_angle(c, b, a)`. Every phase threshold in [`crate::config`] is
/// tuned against this exact formula.
///
/// Degenerate input where an endpoint coincides with the vertex resolves
/// through `f64::atan2(0, 0) == 0` rather than producing NaN; when both
/// endpoints coincide with the vertex the angle is 0.
#[must_use]
pub fn joint_angle(first: &Landmark, vertex: &Landmark, second: &Landmark) -> f64 {
    let radians = (second.y - vertex.y).atan2(second.x - vertex.x)
        - (first.y - vertex.y).atan2(first.x - vertex.x);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Vertical midpoint of a left/right landmark pair.
///
/// Used for the shoulder-center vs hip-center alignment check in the
/// push-up counter.
#[must_use]
pub fn midpoint_y(left: &Landmark, right: &Landmark) -> f64 {
    (left.y + right.y) / 2.0
}

/// Round to one decimal place for diagnostic reporting
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places for diagnostic reporting
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
