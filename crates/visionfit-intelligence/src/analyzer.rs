// ABOUTME: Pose analyzer dispatch, frame validation, and uniform output envelope
// ABOUTME: Routes landmark frames to per-exercise counters and normalizes their results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pose analyzer dispatch and the uniform per-frame output contract.
//!
//! The analyzer owns one long-lived counter per supported exercise and routes
//! each incoming frame by a total match over [`ExerciseType`]. Selector and
//! frame-shape validation happen at this boundary; every failure is converted
//! into a structured failure envelope, and the counters' phase/rep state is
//! never mutated by a failed frame.

use crate::config::FormAnalysisConfig;
use crate::counters::{
    JumpingJackAnalysis, JumpingJackCounter, JumpingJackPhase, PushupAnalysis, PushupCounter,
    PushupPhase, SquatAnalysis, SquatCounter, SquatPhase,
};
use serde::Serialize;
use tracing::warn;
use visionfit_core::errors::{AnalysisError, AnalysisResult};
use visionfit_core::models::{ExerciseType, Landmark, PoseFrame};

/// Feedback placeholder when a counter produced no messages
const NO_FEEDBACK_MESSAGE: &str = "No feedback available";
/// Feedback emitted on every failure envelope
const ANALYSIS_ERROR_MESSAGE: &str = "Analysis error occurred";

/// Per-frame result from one of the exercise counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrameAnalysis {
    /// Push-up counter output
    Pushup(PushupAnalysis),
    /// Squat counter output
    Squat(SquatAnalysis),
    /// Jumping-jack counter output
    JumpingJack(JumpingJackAnalysis),
}

impl FrameAnalysis {
    /// Cumulative repetition count
    #[must_use]
    pub const fn reps(&self) -> u32 {
        match self {
            Self::Pushup(analysis) => analysis.reps,
            Self::Squat(analysis) => analysis.reps,
            Self::JumpingJack(analysis) => analysis.reps,
        }
    }

    /// Form quality score in [0, 100]
    #[must_use]
    pub const fn form_score(&self) -> f64 {
        match self {
            Self::Pushup(analysis) => analysis.form_score,
            Self::Squat(analysis) => analysis.form_score,
            Self::JumpingJack(analysis) => analysis.form_score,
        }
    }

    /// Feedback messages in priority order
    #[must_use]
    pub fn feedback(&self) -> &[String] {
        match self {
            Self::Pushup(analysis) => &analysis.feedback,
            Self::Squat(analysis) => &analysis.feedback,
            Self::JumpingJack(analysis) => &analysis.feedback,
        }
    }
}

/// Exercise-specific diagnostic fields carried beside the uniform envelope
/// fields (serialized flattened, so the wire shape matches the counters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrameDiagnostics {
    /// Push-up joint diagnostics
    Pushup {
        /// Average elbow angle, degrees
        arm_angle: f64,
        /// Shoulder-to-hip alignment score in [0, 100]
        body_alignment: f64,
        /// Phase after the frame
        phase: PushupPhase,
    },
    /// Squat joint diagnostics
    Squat {
        /// Average knee angle, degrees
        knee_angle: f64,
        /// Phase after the frame
        phase: SquatPhase,
    },
    /// Jumping-jack spread diagnostics
    JumpingJack {
        /// Wrist spread over body height
        arm_ratio: f64,
        /// Ankle spread over body height
        leg_ratio: f64,
        /// Phase after the frame
        phase: JumpingJackPhase,
    },
}

/// Uniform per-frame output contract handed to the transport layer.
///
/// Success envelopes carry the counter's diagnostics flattened beside the
/// uniform fields; failure envelopes carry the error description and fixed
/// defaults. `feedback` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisEnvelope {
    /// Whether the frame was analyzed successfully
    pub success: bool,
    /// Cumulative repetition count (0 on failure)
    pub reps: u32,
    /// Form quality score in [0, 100] (0 on failure)
    pub form_score: f64,
    /// Ordered feedback messages; never empty
    pub feedback: Vec<String>,
    /// Error description when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Exercise-specific diagnostic fields, absent on failure
    #[serde(flatten)]
    pub diagnostics: Option<FrameDiagnostics>,
}

impl AnalysisEnvelope {
    /// Build a success envelope from a counter result
    #[must_use]
    pub fn from_analysis(analysis: FrameAnalysis) -> Self {
        let (reps, form_score, mut feedback, diagnostics) = match analysis {
            FrameAnalysis::Pushup(analysis) => (
                analysis.reps,
                analysis.form_score,
                analysis.feedback,
                FrameDiagnostics::Pushup {
                    arm_angle: analysis.arm_angle,
                    body_alignment: analysis.body_alignment,
                    phase: analysis.phase,
                },
            ),
            FrameAnalysis::Squat(analysis) => (
                analysis.reps,
                analysis.form_score,
                analysis.feedback,
                FrameDiagnostics::Squat {
                    knee_angle: analysis.knee_angle,
                    phase: analysis.phase,
                },
            ),
            FrameAnalysis::JumpingJack(analysis) => (
                analysis.reps,
                analysis.form_score,
                analysis.feedback,
                FrameDiagnostics::JumpingJack {
                    arm_ratio: analysis.arm_ratio,
                    leg_ratio: analysis.leg_ratio,
                    phase: analysis.phase,
                },
            ),
        };

        if feedback.is_empty() {
            feedback.push(NO_FEEDBACK_MESSAGE.to_owned());
        }

        Self {
            success: true,
            reps,
            form_score,
            feedback,
            error: None,
            diagnostics: Some(diagnostics),
        }
    }

    /// Build the uniform failure envelope for a per-frame error
    #[must_use]
    pub fn failure(error: &AnalysisError) -> Self {
        Self {
            success: false,
            reps: 0,
            form_score: 0.0,
            feedback: vec![ANALYSIS_ERROR_MESSAGE.to_owned()],
            error: Some(error.to_string()),
            diagnostics: None,
        }
    }
}

/// Routes landmark frames to per-exercise counters.
///
/// One analyzer tracks one subject: the counters inside it are long-lived
/// across frames and must be fed in strict temporal order. For multiple
/// concurrent subjects, hold one analyzer per session (see
/// [`crate::session::SessionRegistry`]).
#[derive(Debug, Clone)]
pub struct PoseAnalyzer {
    pushup: PushupCounter,
    squat: SquatCounter,
    jumping_jack: JumpingJackCounter,
}

impl Default for PoseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&FormAnalysisConfig::default())
    }

    /// Create an analyzer with explicit thresholds
    #[must_use]
    pub fn with_config(config: &FormAnalysisConfig) -> Self {
        Self {
            pushup: PushupCounter::with_config(config.pushup.clone()),
            squat: SquatCounter::with_config(config.squat.clone()),
            jumping_jack: JumpingJackCounter::with_config(config.jumping_jack.clone()),
        }
    }

    /// Analyze one frame for the selected exercise.
    ///
    /// This is the string-keyed entry point used by the transport layer: it
    /// parses the selector, validates the landmark sequence, routes to the
    /// matching counter, and normalizes the result. It never fails: every
    /// error is converted into a failure envelope, leaving counter state
    /// untouched.
    pub fn analyze(&mut self, exercise_type: &str, landmarks: &[Landmark]) -> AnalysisEnvelope {
        match self.try_analyze(exercise_type, landmarks) {
            Ok(analysis) => AnalysisEnvelope::from_analysis(analysis),
            Err(error) => {
                warn!(exercise_type, error = %error, "Pose analysis failed");
                AnalysisEnvelope::failure(&error)
            }
        }
    }

    fn try_analyze(
        &mut self,
        exercise_type: &str,
        landmarks: &[Landmark],
    ) -> AnalysisResult<FrameAnalysis> {
        let exercise = exercise_type.parse::<ExerciseType>()?;
        let frame = PoseFrame::new(landmarks.to_vec())?;
        self.analyze_frame(exercise, &frame)
    }

    /// Typed dispatch over the closed exercise set.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidLandmark` when a required landmark
    /// carries non-finite coordinates; the counter's phase and rep count are
    /// untouched on failure.
    pub fn analyze_frame(
        &mut self,
        exercise: ExerciseType,
        frame: &PoseFrame,
    ) -> AnalysisResult<FrameAnalysis> {
        match exercise {
            ExerciseType::Pushup => self.pushup.analyze(frame).map(FrameAnalysis::Pushup),
            ExerciseType::Squat => self.squat.analyze(frame).map(FrameAnalysis::Squat),
            ExerciseType::JumpingJack => self
                .jumping_jack
                .analyze(frame)
                .map(FrameAnalysis::JumpingJack),
        }
    }

    /// Cumulative repetition count for one exercise
    #[must_use]
    pub const fn rep_count(&self, exercise: ExerciseType) -> u32 {
        match exercise {
            ExerciseType::Pushup => self.pushup.rep_count(),
            ExerciseType::Squat => self.squat.rep_count(),
            ExerciseType::JumpingJack => self.jumping_jack.rep_count(),
        }
    }
}
