// ABOUTME: Configuration error types for form-analysis threshold validation
// ABOUTME: Defines error variants for invalid ranges and scoring weight failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for form-analysis threshold validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., hysteresis band inverted)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Scoring weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}
