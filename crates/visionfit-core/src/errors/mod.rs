// ABOUTME: Analysis error types for the form-analysis engine
// ABOUTME: Structured errors for selector, frame shape, and landmark validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Error Types
//!
//! Provides structured error types for pose-analysis operations:
//! - `AnalysisError` - per-frame validation and dispatch failures
//! - `AnalysisResult` - result alias used across the engine
//!
//! Every error kind is recoverable at the analyzer boundary; a failed frame
//! never mutates counter state.

use crate::constants::POSE_LANDMARK_COUNT;
use thiserror::Error;
use uuid::Uuid;

/// Result alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors raised while validating or analyzing a pose frame.
///
/// These errors carry enough context for the transport layer to build its
/// failure envelope without re-inspecting the frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Exercise selector outside the supported closed set
    #[error("Unsupported exercise type: {exercise_type}")]
    UnsupportedExercise {
        /// The selector string that failed to parse
        exercise_type: String,
    },

    /// Frame carries fewer landmarks than the pose model contract requires
    #[error("Insufficient landmarks detected: expected {expected}, got {actual}")]
    InsufficientLandmarks {
        /// Required landmark count (the fixed pose-model contract)
        expected: usize,
        /// Landmark count actually received
        actual: usize,
    },

    /// A required landmark carries non-finite coordinates
    #[error("Landmark {index} ({name}) has non-finite coordinates")]
    InvalidLandmark {
        /// Positional index of the offending landmark
        index: usize,
        /// Anatomical name of the offending landmark
        name: &'static str,
    },

    /// Tracking session id not present in the registry
    #[error("No active tracking session with id {session_id}")]
    SessionNotFound {
        /// The unknown session id
        session_id: Uuid,
    },
}

impl AnalysisError {
    /// Create an "unsupported exercise" error
    #[must_use]
    pub fn unsupported_exercise(exercise_type: impl Into<String>) -> Self {
        Self::UnsupportedExercise {
            exercise_type: exercise_type.into(),
        }
    }

    /// Create an "insufficient landmarks" error for an undersized frame
    #[must_use]
    pub const fn insufficient_landmarks(actual: usize) -> Self {
        Self::InsufficientLandmarks {
            expected: POSE_LANDMARK_COUNT,
            actual,
        }
    }

    /// Create an "invalid landmark" error for a non-finite coordinate
    #[must_use]
    pub const fn invalid_landmark(index: usize, name: &'static str) -> Self {
        Self::InvalidLandmark { index, name }
    }

    /// Create a "session not found" error
    #[must_use]
    pub const fn session_not_found(session_id: Uuid) -> Self {
        Self::SessionNotFound { session_id }
    }
}
