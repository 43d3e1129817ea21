// ABOUTME: Core types and constants for the VisionFit form-analysis engine
// ABOUTME: Foundation crate with landmark models, exercise types, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VisionFit Core
//!
//! Foundation crate providing shared types for the VisionFit exercise
//! form-analysis engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Analysis error handling with `AnalysisError` and `AnalysisResult`
//! - **constants**: Pose landmark index convention and frame sizing
//! - **models**: Landmark, pose frame, and exercise type models

/// Analysis error types shared across the workspace
pub mod errors;

/// Pose landmark index convention and frame sizing constants
pub mod constants;

/// Core data models (`Landmark`, `PoseFrame`, `ExerciseType`)
pub mod models;
