// ABOUTME: Caller-owned session registry mapping tracking sessions to analyzers
// ABOUTME: Explicit per-session lifecycle with metadata and end-of-session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session registry for concurrent tracked subjects.
//!
//! Each active tracking session owns one [`PoseAnalyzer`]; the registry maps
//! session ids to analyzers with explicit start/end lifecycle. The registry
//! itself is synchronous and exclusively owned; a concurrent transport
//! layer wraps it in its own lock and serializes frames per session before
//! delivery, since phase transitions depend on strict frame order.
//!
//! The engine persists nothing: [`SessionSummary`] hands the final rep
//! counts to the external layer at session end.

use crate::analyzer::{AnalysisEnvelope, PoseAnalyzer};
use crate::config::FormAnalysisConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;
use visionfit_core::errors::{AnalysisError, AnalysisResult};
use visionfit_core::models::{ExerciseType, Landmark};

/// Metadata tracked for one active session
#[derive(Debug, Clone, Serialize)]
pub struct SessionMetadata {
    /// When the session was started
    pub started_at: DateTime<Utc>,
    /// When the last frame was delivered
    pub last_activity: DateTime<Utc>,
    /// Number of frames delivered, including failed ones
    pub frames_processed: u64,
}

/// Final per-session totals handed to the external layer for persistence
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Id of the ended session
    pub session_id: Uuid,
    /// When the session was started
    pub started_at: DateTime<Utc>,
    /// When the session was ended
    pub ended_at: DateTime<Utc>,
    /// Number of frames delivered over the session lifetime
    pub frames_processed: u64,
    /// Push-up repetitions counted
    pub pushup_reps: u32,
    /// Squat repetitions counted
    pub squat_reps: u32,
    /// Jumping-jack repetitions counted
    pub jumping_jack_reps: u32,
}

/// One active tracking session: an analyzer plus its metadata
#[derive(Debug)]
struct TrackingSession {
    analyzer: PoseAnalyzer,
    metadata: SessionMetadata,
}

/// Registry of active tracking sessions keyed by session id.
///
/// Sessions are created at the start of an exercise-analysis view and
/// destroyed when it ends; rep counts never reset within a session.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, TrackingSession>,
    config: FormAnalysisConfig,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Create a registry whose sessions use default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormAnalysisConfig::default())
    }

    /// Create a registry whose sessions use explicit thresholds
    #[must_use]
    pub fn with_config(config: FormAnalysisConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Start a new tracking session and return its id
    pub fn start_session(&mut self) -> Uuid {
        let session_id = Uuid::new_v4();
        let now = Utc::now();
        self.sessions.insert(
            session_id,
            TrackingSession {
                analyzer: PoseAnalyzer::with_config(&self.config),
                metadata: SessionMetadata {
                    started_at: now,
                    last_activity: now,
                    frames_processed: 0,
                },
            },
        );
        info!(%session_id, "Started tracking session");
        session_id
    }

    /// Number of active sessions
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Metadata for an active session, if present
    #[must_use]
    pub fn metadata(&self, session_id: Uuid) -> Option<&SessionMetadata> {
        self.sessions
            .get(&session_id)
            .map(|session| &session.metadata)
    }

    /// Analyze one frame within a session.
    ///
    /// Per-frame analysis failures (bad selector, undersized frame, invalid
    /// landmark) are still `Ok`: they surface inside the envelope, since the
    /// session remains live and the caller may simply submit the next frame.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::SessionNotFound` when the session id is not
    /// registered.
    pub fn analyze(
        &mut self,
        session_id: Uuid,
        exercise_type: &str,
        landmarks: &[Landmark],
    ) -> AnalysisResult<AnalysisEnvelope> {
        let session = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| AnalysisError::session_not_found(session_id))?;

        session.metadata.last_activity = Utc::now();
        session.metadata.frames_processed += 1;
        Ok(session.analyzer.analyze(exercise_type, landmarks))
    }

    /// End a session, removing it and returning its final totals.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::SessionNotFound` when the session id is not
    /// registered.
    pub fn end_session(&mut self, session_id: Uuid) -> AnalysisResult<SessionSummary> {
        let session = self
            .sessions
            .remove(&session_id)
            .ok_or_else(|| AnalysisError::session_not_found(session_id))?;

        let summary = SessionSummary {
            session_id,
            started_at: session.metadata.started_at,
            ended_at: Utc::now(),
            frames_processed: session.metadata.frames_processed,
            pushup_reps: session.analyzer.rep_count(ExerciseType::Pushup),
            squat_reps: session.analyzer.rep_count(ExerciseType::Squat),
            jumping_jack_reps: session.analyzer.rep_count(ExerciseType::JumpingJack),
        };
        info!(
            %session_id,
            frames = summary.frames_processed,
            "Ended tracking session"
        );
        Ok(summary)
    }
}
