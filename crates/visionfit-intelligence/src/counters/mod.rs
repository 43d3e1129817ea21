// ABOUTME: Per-exercise repetition counters and form scorers
// ABOUTME: Stateful frame-by-frame analysis for push-ups, squats, and jumping jacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-exercise repetition counters.
//!
//! Each counter is a small state machine over a phase (one half-cycle of the
//! motion) and a monotone rep count. A rep is counted only on the transition
//! that completes a full cycle. Counters process frames for one subject in
//! strict temporal order and must be exclusively owned by that subject's
//! processing path.
//!
//! Counters validate every required landmark before mutating state: a frame
//! that fails validation is read-only with respect to phase and rep count.

/// Push-up counter (elbow angle cycle)
pub mod pushup;

/// Squat counter (knee angle cycle)
pub mod squat;

/// Jumping-jack counter (limb spread cycle)
pub mod jumping_jack;

pub use jumping_jack::{JumpingJackAnalysis, JumpingJackCounter, JumpingJackPhase};
pub use pushup::{PushupAnalysis, PushupCounter, PushupPhase};
pub use squat::{SquatAnalysis, SquatCounter, SquatPhase};
