// ABOUTME: Exercise type enumeration for pose analysis dispatch
// ABOUTME: Closed set of supported exercises with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of exercises the form-analysis engine supports.
///
/// The set is closed: dispatch over it is exhaustive at compile time, and an
/// out-of-set selector is rejected once, at the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Push-up: arm extension cycle tracked at the elbows
    Pushup,
    /// Squat: leg extension cycle tracked at the knees
    Squat,
    /// Jumping jack: limb spread cycle tracked at wrists and ankles
    JumpingJack,
}

impl ExerciseType {
    /// All supported exercise types
    pub const ALL: [Self; 3] = [Self::Pushup, Self::Squat, Self::JumpingJack];

    /// Canonical wire identifier for this exercise
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pushup => "pushup",
            Self::Squat => "squat",
            Self::JumpingJack => "jumping_jack",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pushup" | "push_up" | "push-up" => Ok(Self::Pushup),
            "squat" => Ok(Self::Squat),
            "jumping_jack" | "jumping-jack" | "jumpingjack" => Ok(Self::JumpingJack),
            other => Err(AnalysisError::unsupported_exercise(other)),
        }
    }
}
