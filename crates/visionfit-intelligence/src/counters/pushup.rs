// ABOUTME: Push-up repetition counter and form scorer
// ABOUTME: Tracks the elbow-angle cycle and shoulder-to-hip body alignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PushupConfig;
use crate::geometry::{joint_angle, midpoint_y, round1};
use serde::{Deserialize, Serialize};
use tracing::debug;
use visionfit_core::constants::landmark_indices::{
    LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER,
    RIGHT_WRIST,
};
use visionfit_core::errors::AnalysisResult;
use visionfit_core::models::PoseFrame;

/// Vertical shoulder/hip deviation to alignment-score conversion factor
const ALIGNMENT_DEVIATION_SCALE: f64 = 1000.0;
/// Angle score in the transition zone between the good-form bands
const TRANSITION_ZONE_SCORE: f64 = 70.0;
/// Score penalty per degree outside the scored bands
const ANGLE_PENALTY_PER_DEGREE: f64 = 2.0;

/// Half-cycle of the push-up motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushupPhase {
    /// Arms extended, body at the top of the cycle
    Up,
    /// Chest lowered, elbows flexed
    Down,
}

/// Per-frame push-up analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushupAnalysis {
    /// Cumulative repetitions this session
    pub reps: u32,
    /// Combined form quality score in [0, 100]
    pub form_score: f64,
    /// Corrective feedback, highest priority first; never empty
    pub feedback: Vec<String>,
    /// Average elbow angle across both arms, degrees
    pub arm_angle: f64,
    /// Shoulder-to-hip alignment score in [0, 100]
    pub body_alignment: f64,
    /// Phase after this frame
    pub phase: PushupPhase,
}

/// Push-up repetition counter.
///
/// A rep is counted on the down-to-up transition, i.e. on completing a full
/// cycle: the arm angle must drop below the descent threshold and then rise
/// above the lockout threshold.
#[derive(Debug, Clone)]
pub struct PushupCounter {
    config: PushupConfig,
    phase: PushupPhase,
    rep_count: u32,
}

impl Default for PushupCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PushupCounter {
    /// Create a counter with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PushupConfig::default())
    }

    /// Create a counter with explicit thresholds
    #[must_use]
    pub const fn with_config(config: PushupConfig) -> Self {
        Self {
            config,
            phase: PushupPhase::Up,
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
    pub const fn phase(&self) -> PushupPhase {
        self.phase
    }

    /// Analyze one frame, advancing the phase state machine.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidLandmark` when a required landmark
    /// carries non-finite coordinates. Phase and rep count are untouched on
    /// failure.
    pub fn analyze(&mut self, frame: &PoseFrame) -> AnalysisResult<PushupAnalysis> {
        let left_shoulder = frame.require(LEFT_SHOULDER, "left_shoulder")?;
        let right_shoulder = frame.require(RIGHT_SHOULDER, "right_shoulder")?;
        let left_elbow = frame.require(LEFT_ELBOW, "left_elbow")?;
        let right_elbow = frame.require(RIGHT_ELBOW, "right_elbow")?;
        let left_wrist = frame.require(LEFT_WRIST, "left_wrist")?;
        let right_wrist = frame.require(RIGHT_WRIST, "right_wrist")?;
        let left_hip = frame.require(LEFT_HIP, "left_hip")?;
        let right_hip = frame.require(RIGHT_HIP, "right_hip")?;

        let left_arm_angle = joint_angle(left_shoulder, left_elbow, left_wrist);
        let right_arm_angle = joint_angle(right_shoulder, right_elbow, right_wrist);
        let arm_angle = (left_arm_angle + right_arm_angle) / 2.0;

        // Straight body keeps the shoulder and hip centers at the same height
        let vertical_deviation =
            (midpoint_y(left_shoulder, right_shoulder) - midpoint_y(left_hip, right_hip)).abs();
        let body_alignment =
            (100.0 - vertical_deviation * ALIGNMENT_DEVIATION_SCALE).clamp(0.0, 100.0);

        // All landmark reads validated above; state mutation is safe from here
        if self.phase == PushupPhase::Up && arm_angle < self.config.descent_angle {
            self.phase = PushupPhase::Down;
        } else if self.phase == PushupPhase::Down && arm_angle > self.config.lockout_angle {
            self.phase = PushupPhase::Up;
            self.rep_count += 1;
            debug!(
                reps = self.rep_count,
                arm_angle, "Push-up repetition completed"
            );
        }

        let form_score = self.form_score(arm_angle, body_alignment);
        let feedback = self.feedback(arm_angle, body_alignment);

        Ok(PushupAnalysis {
            reps: self.rep_count,
            form_score: round1(form_score),
            feedback,
            arm_angle: round1(arm_angle),
            body_alignment: round1(body_alignment),
            phase: self.phase,
        })
    }

    /// Combined form score: weighted arm-angle band score and body alignment.
    ///
    /// The angle scores 100 inside the bottom band
    /// `[min_depth_angle, descent_angle]` and the lockout band
    /// `[lockout_angle, 180]`, a flat transition score between the bands, and
    /// a distance penalty from the descent threshold outside them.
    fn form_score(&self, arm_angle: f64, body_alignment: f64) -> f64 {
        let cfg = &self.config;
        let angle_score = if (cfg.min_depth_angle..=cfg.descent_angle).contains(&arm_angle)
            || (cfg.lockout_angle..=180.0).contains(&arm_angle)
        {
            100.0
        } else if arm_angle > cfg.descent_angle && arm_angle < cfg.lockout_angle {
            TRANSITION_ZONE_SCORE
        } else {
            ((arm_angle - cfg.descent_angle).abs())
                .mul_add(-ANGLE_PENALTY_PER_DEGREE, 100.0)
                .max(0.0)
        };

        angle_score
            .mul_add(cfg.angle_weight, body_alignment * cfg.alignment_weight)
            .clamp(0.0, 100.0)
    }

    /// Feedback priority chain, evaluated against the post-transition phase.
    /// The alignment warning is appended independently of the chain.
    fn feedback(&self, arm_angle: f64, body_alignment: f64) -> Vec<String> {
        let cfg = &self.config;
        let mut feedback = Vec::new();

        if arm_angle < cfg.min_depth_angle {
            feedback.push("Don't go too low - protect your shoulders".to_owned());
        } else if arm_angle < cfg.descent_angle && self.phase == PushupPhase::Down {
            feedback.push("Good depth! Now push up".to_owned());
        } else if arm_angle > cfg.raise_prompt_angle && arm_angle < cfg.lockout_angle {
            feedback.push("Push all the way up".to_owned());
        } else if arm_angle >= cfg.lockout_angle {
            feedback.push("Great form!".to_owned());
        }

        if body_alignment < cfg.alignment_warning_score {
            feedback.push("Keep your body straight - avoid sagging".to_owned());
        }

        if feedback.is_empty() {
            feedback.push("Excellent form!".to_owned());
        }

        feedback
    }
}
