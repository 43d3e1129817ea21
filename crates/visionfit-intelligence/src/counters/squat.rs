// ABOUTME: Squat repetition counter and form scorer
// ABOUTME: Tracks the knee-angle cycle between hip, knee, and ankle landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::SquatConfig;
use crate::geometry::{joint_angle, round1};
use serde::{Deserialize, Serialize};
use tracing::debug;
use visionfit_core::constants::landmark_indices::{
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};
use visionfit_core::errors::AnalysisResult;
use visionfit_core::models::PoseFrame;

/// Angle score in the transition zone between the good-form bands
const TRANSITION_ZONE_SCORE: f64 = 70.0;
/// Pivot angle for the out-of-band distance penalty
const PENALTY_REFERENCE_ANGLE: f64 = 100.0;
/// Score penalty per degree away from the reference angle
const ANGLE_PENALTY_PER_DEGREE: f64 = 1.5;

/// Half-cycle of the squat motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquatPhase {
    /// Standing, knees extended
    Up,
    /// Bottom of the squat, knees flexed
    Down,
}

/// Per-frame squat analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquatAnalysis {
    /// Cumulative repetitions this session
    pub reps: u32,
    /// Form quality score in [0, 100]
    pub form_score: f64,
    /// Corrective feedback, highest priority first; never empty
    pub feedback: Vec<String>,
    /// Average knee angle across both legs, degrees
    pub knee_angle: f64,
    /// Phase after this frame
    pub phase: SquatPhase,
}

/// Squat repetition counter.
///
/// A rep is counted on the down-to-up transition: the knee angle must drop
/// below the descent threshold and then rise above the lockout threshold.
#[derive(Debug, Clone)]
pub struct SquatCounter {
    config: SquatConfig,
    phase: SquatPhase,
    rep_count: u32,
}

impl Default for SquatCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SquatCounter {
    /// Create a counter with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SquatConfig::default())
    }

    /// Create a counter with explicit thresholds
    #[must_use]
    pub const fn with_config(config: SquatConfig) -> Self {
        Self {
            config,
            phase: SquatPhase::Up,
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
    pub const fn phase(&self) -> SquatPhase {
        self.phase
    }

    /// Analyze one frame, advancing the phase state machine.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidLandmark` when a required landmark
    /// carries non-finite coordinates. Phase and rep count are untouched on
    /// failure.
    pub fn analyze(&mut self, frame: &PoseFrame) -> AnalysisResult<SquatAnalysis> {
        let left_hip = frame.require(LEFT_HIP, "left_hip")?;
        let right_hip = frame.require(RIGHT_HIP, "right_hip")?;
        let left_knee = frame.require(LEFT_KNEE, "left_knee")?;
        let right_knee = frame.require(RIGHT_KNEE, "right_knee")?;
        let left_ankle = frame.require(LEFT_ANKLE, "left_ankle")?;
        let right_ankle = frame.require(RIGHT_ANKLE, "right_ankle")?;

        let left_knee_angle = joint_angle(left_hip, left_knee, left_ankle);
        let right_knee_angle = joint_angle(right_hip, right_knee, right_ankle);
        let knee_angle = (left_knee_angle + right_knee_angle) / 2.0;

        if self.phase == SquatPhase::Up && knee_angle < self.config.descent_angle {
            self.phase = SquatPhase::Down;
        } else if self.phase == SquatPhase::Down && knee_angle > self.config.lockout_angle {
            self.phase = SquatPhase::Up;
            self.rep_count += 1;
            debug!(reps = self.rep_count, knee_angle, "Squat repetition completed");
        }

        let form_score = self.form_score(knee_angle);
        let feedback = self.feedback(knee_angle);

        Ok(SquatAnalysis {
            reps: self.rep_count,
            form_score: round1(form_score),
            feedback,
            knee_angle: round1(knee_angle),
            phase: self.phase,
        })
    }

    /// Knee-angle band score: 100 inside `[min_depth_angle, descent_angle]`
    /// and `[lockout_angle, 180]`, a flat transition score between the bands,
    /// and a distance penalty from the reference angle outside them.
    fn form_score(&self, knee_angle: f64) -> f64 {
        let cfg = &self.config;
        if (cfg.min_depth_angle..=cfg.descent_angle).contains(&knee_angle)
            || (cfg.lockout_angle..=180.0).contains(&knee_angle)
        {
            100.0
        } else if knee_angle > cfg.descent_angle && knee_angle < cfg.lockout_angle {
            TRANSITION_ZONE_SCORE
        } else {
            ((knee_angle - PENALTY_REFERENCE_ANGLE).abs())
                .mul_add(-ANGLE_PENALTY_PER_DEGREE, 100.0)
                .max(0.0)
        }
    }

    /// Feedback priority chain, evaluated against the post-transition phase
    fn feedback(&self, knee_angle: f64) -> Vec<String> {
        let cfg = &self.config;
        let mut feedback = Vec::new();

        if knee_angle < cfg.min_depth_angle {
            feedback.push("Don't squat too deep".to_owned());
        } else if knee_angle <= cfg.descent_angle && self.phase == SquatPhase::Down {
            feedback.push("Perfect depth! Now stand up".to_owned());
        } else if knee_angle > cfg.stand_prompt_angle && knee_angle < cfg.lockout_angle {
            feedback.push("Stand up completely".to_owned());
        } else if knee_angle >= cfg.lockout_angle {
            feedback.push("Great squat!".to_owned());
        }

        if feedback.is_empty() {
            feedback.push("Excellent form!".to_owned());
        }

        feedback
    }
}
