// ABOUTME: Core data models for the form-analysis engine
// ABOUTME: Re-exports landmark, pose frame, and exercise type models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Landmark and pose frame models
pub mod landmark;

/// Exercise type enumeration
pub mod exercise;

pub use exercise::ExerciseType;
pub use landmark::{Landmark, PoseFrame};
