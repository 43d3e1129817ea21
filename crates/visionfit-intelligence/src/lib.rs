// ABOUTME: Exercise form-analysis engine for the VisionFit platform
// ABOUTME: Per-exercise repetition counters, analyzer dispatch, and session registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VisionFit Intelligence
//!
//! Exercise repetition and form-scoring engine. Consumes streams of pose
//! landmarks (one 33-landmark frame per video frame) and produces rep counts,
//! form scores, and corrective feedback per exercise.
//!
//! Frame analysis is synchronous and non-blocking: each counter mutates its
//! phase state in strict frame order and holds no I/O or suspension points.
//! Concurrent sessions are independent; the caller owns one [`PoseAnalyzer`]
//! (or one entry in a [`SessionRegistry`]) per tracked subject.
//!
//! ## Modules
//!
//! - **geometry**: joint angle and midpoint helpers shared by all counters
//! - **counters**: per-exercise state machines (push-up, squat, jumping jack)
//! - **analyzer**: dispatch, frame validation, and the uniform output envelope
//! - **session**: caller-owned registry mapping session ids to analyzers
//! - **config**: tuned thresholds with validated defaults

/// Joint angle and midpoint helpers shared by all counters
pub mod geometry;

/// Per-exercise repetition counters and form scorers
pub mod counters;

/// Pose analyzer dispatch, validation, and output envelope
pub mod analyzer;

/// Caller-owned session registry for concurrent tracked subjects
pub mod session;

/// Form-analysis threshold configuration
pub mod config;

pub use analyzer::{AnalysisEnvelope, FrameAnalysis, PoseAnalyzer};
pub use config::FormAnalysisConfig;
pub use session::{SessionRegistry, SessionSummary};
pub use visionfit_core::models::{ExerciseType, Landmark, PoseFrame};
