// ABOUTME: Landmark and pose frame models consumed by the exercise counters
// ABOUTME: Validates the 33-landmark frame contract of the external pose model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::POSE_LANDMARK_COUNT;
use crate::errors::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};

/// One tracked body keypoint with normalized 2D position.
///
/// Coordinates are typically in `[0, 1]` but the pose model does not clamp
/// them; the analysis core only requires that they are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position
    pub y: f64,
    /// Detection confidence reported by the pose model, when available.
    /// Carried for the wire contract; ignored by the analysis core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    /// Whether both coordinates are finite (not NaN or infinite)
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One complete ordered set of landmarks for a single video frame.
///
/// Construction validates the frame against the fixed 33-landmark contract;
/// index meaning follows the external pose model convention in
/// [`crate::constants::landmark_indices`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct PoseFrame {
    landmarks: Vec<Landmark>,
}

impl PoseFrame {
    /// Build a frame from an ordered landmark sequence.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InsufficientLandmarks` when the sequence has
    /// fewer than [`POSE_LANDMARK_COUNT`] entries.
    pub fn new(landmarks: Vec<Landmark>) -> AnalysisResult<Self> {
        if landmarks.len() < POSE_LANDMARK_COUNT {
            return Err(AnalysisError::insufficient_landmarks(landmarks.len()));
        }
        Ok(Self { landmarks })
    }

    /// Landmark at a positional index, if present
    #[must_use]
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Landmark at a positional index, validated for finite coordinates.
    ///
    /// This is the read path used by the exercise counters: every required
    /// landmark is resolved through it before any counter state mutates.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InsufficientLandmarks` when the index is out
    /// of range, or `AnalysisError::InvalidLandmark` when the landmark
    /// carries non-finite coordinates.
    pub fn require(&self, index: usize, name: &'static str) -> AnalysisResult<&Landmark> {
        let landmark = self
            .landmarks
            .get(index)
            .ok_or_else(|| AnalysisError::insufficient_landmarks(self.landmarks.len()))?;
        if !landmark.is_finite() {
            return Err(AnalysisError::invalid_landmark(index, name));
        }
        Ok(landmark)
    }

    /// All landmarks in frame order
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Number of landmarks in the frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the frame carries no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

impl TryFrom<Vec<Landmark>> for PoseFrame {
    type Error = AnalysisError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::new(landmarks)
    }
}

impl From<PoseFrame> for Vec<Landmark> {
    fn from(frame: PoseFrame) -> Self {
        frame.landmarks
    }
}
