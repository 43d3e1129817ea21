// ABOUTME: Configuration module for the form-analysis engine
// ABOUTME: Re-exports threshold configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Form-analysis threshold configuration (per-exercise hysteresis bands and weights)
pub mod form;

/// Configuration error types
pub mod error;

pub use error::ConfigError;
pub use form::{FormAnalysisConfig, JumpingJackConfig, PushupConfig, SquatConfig};
