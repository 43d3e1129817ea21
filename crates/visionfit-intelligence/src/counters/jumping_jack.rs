// ABOUTME: Jumping-jack repetition counter and form scorer
// ABOUTME: Tracks limb spread ratios normalized by body height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::JumpingJackConfig;
use crate::geometry::{round1, round2};
use serde::{Deserialize, Serialize};
use tracing::debug;
use visionfit_core::constants::landmark_indices::{
    LEFT_ANKLE, LEFT_WRIST, NOSE, RIGHT_ANKLE, RIGHT_WRIST,
};
use visionfit_core::errors::AnalysisResult;
use visionfit_core::models::PoseFrame;

/// Score penalty per unit of arm/leg ratio difference
const COORDINATION_PENALTY_SCALE: f64 = 200.0;
/// Combined spread ratio to range-of-motion score conversion factor
const RANGE_SCORE_SCALE: f64 = 100.0;

/// Half-cycle of the jumping-jack motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpingJackPhase {
    /// Arms down, feet together
    Closed,
    /// Arms raised, feet apart
    Open,
}

/// Per-frame jumping-jack analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpingJackAnalysis {
    /// Cumulative repetitions this session
    pub reps: u32,
    /// Form quality score in [0, 100]
    pub form_score: f64,
    /// Corrective feedback; never empty
    pub feedback: Vec<String>,
    /// Wrist spread over body height
    pub arm_ratio: f64,
    /// Ankle spread over body height
    pub leg_ratio: f64,
    /// Phase after this frame
    pub phase: JumpingJackPhase,
}

/// Jumping-jack repetition counter.
///
/// A rep is counted on release, i.e. the open-to-closed transition after
/// both the arm and leg spread ratios exceeded their open thresholds.
#[derive(Debug, Clone)]
pub struct JumpingJackCounter {
    config: JumpingJackConfig,
    phase: JumpingJackPhase,
    rep_count: u32,
}

impl Default for JumpingJackCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpingJackCounter {
    /// Create a counter with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(JumpingJackConfig::default())
    }

    /// Create a counter with explicit thresholds
    #[must_use]
    pub const fn with_config(config: JumpingJackConfig) -> Self {
        Self {
            config,
            phase: JumpingJackPhase::Closed,
            rep_count: 0,
        }
    }

    /// Cumulative repetition count
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> JumpingJackPhase {
        self.phase
    }

    /// Analyze one frame, advancing the phase state machine.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidLandmark` when a required landmark
    /// carries non-finite coordinates. Phase and rep count are untouched on
    /// failure.
    pub fn analyze(&mut self, frame: &PoseFrame) -> AnalysisResult<JumpingJackAnalysis> {
        let left_wrist = frame.require(LEFT_WRIST, "left_wrist")?;
        let right_wrist = frame.require(RIGHT_WRIST, "right_wrist")?;
        let left_ankle = frame.require(LEFT_ANKLE, "left_ankle")?;
        let right_ankle = frame.require(RIGHT_ANKLE, "right_ankle")?;
        let nose = frame.require(NOSE, "nose")?;

        let arm_spread = (right_wrist.x - left_wrist.x).abs();
        let leg_spread = (right_ankle.x - left_ankle.x).abs();

        // Spreads are normalized by body height so the thresholds hold at any
        // distance from the camera; zero height degrades to closed ratios
        let body_height = (nose.y - left_ankle.y.min(right_ankle.y)).abs();
        let (arm_ratio, leg_ratio) = if body_height > 0.0 {
            (arm_spread / body_height, leg_spread / body_height)
        } else {
            (0.0, 0.0)
        };

        let is_open =
            arm_ratio > self.config.open_arm_ratio && leg_ratio > self.config.open_leg_ratio;

        if self.phase == JumpingJackPhase::Closed && is_open {
            self.phase = JumpingJackPhase::Open;
        } else if self.phase == JumpingJackPhase::Open && !is_open {
            self.phase = JumpingJackPhase::Closed;
            self.rep_count += 1;
            debug!(
                reps = self.rep_count,
                arm_ratio, leg_ratio, "Jumping-jack repetition completed"
            );
        }

        let form_score = self.form_score(arm_ratio, leg_ratio);
        let feedback = self.feedback(arm_ratio, leg_ratio);

        Ok(JumpingJackAnalysis {
            reps: self.rep_count,
            form_score: round1(form_score),
            feedback,
            arm_ratio: round2(arm_ratio),
            leg_ratio: round2(leg_ratio),
            phase: self.phase,
        })
    }

    /// Weighted coordination and range-of-motion score.
    ///
    /// Coordination rewards arms and legs moving together; range rewards the
    /// combined spread.
    fn form_score(&self, arm_ratio: f64, leg_ratio: f64) -> f64 {
        let cfg = &self.config;
        let coordination = (arm_ratio - leg_ratio)
            .abs()
            .mul_add(-COORDINATION_PENALTY_SCALE, 100.0)
            .max(0.0);
        let range = ((arm_ratio + leg_ratio) * RANGE_SCORE_SCALE).min(100.0);

        coordination.mul_add(cfg.coordination_weight, range * cfg.range_weight)
    }

    /// Independent, non-exclusive feedback checks; all that match are emitted
    fn feedback(&self, arm_ratio: f64, leg_ratio: f64) -> Vec<String> {
        let cfg = &self.config;
        let mut feedback = Vec::new();

        if arm_ratio < cfg.min_arm_ratio {
            feedback.push("Raise your arms higher".to_owned());
        }
        if leg_ratio < cfg.min_leg_ratio {
            feedback.push("Jump with wider legs".to_owned());
        }
        if (arm_ratio - leg_ratio).abs() > cfg.coordination_tolerance {
            feedback.push("Coordinate arms and legs together".to_owned());
        }

        if feedback.is_empty() {
            feedback.push("Perfect jumping jacks!".to_owned());
        }

        feedback
    }
}
