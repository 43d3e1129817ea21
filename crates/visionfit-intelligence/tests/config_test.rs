// ABOUTME: Tests for form-analysis threshold configuration validation
// ABOUTME: Covers default validity, hysteresis ordering, weight sums, and config wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{pose_frame, pushup_frame};
use visionfit_intelligence::config::{
    ConfigError, FormAnalysisConfig, JumpingJackConfig, PushupConfig, SquatConfig,
};
use visionfit_intelligence::counters::PushupCounter;

#[test]
fn test_default_config_validates() {
    assert!(FormAnalysisConfig::default().validate().is_ok());
}

#[test]
fn test_pushup_rejects_inverted_hysteresis() {
    let config = PushupConfig {
        descent_angle: 170.0,
        ..PushupConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_pushup_rejects_bad_weights() {
    let config = PushupConfig {
        angle_weight: 0.5,
        alignment_weight: 0.3,
        ..PushupConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_squat_rejects_stand_prompt_above_lockout() {
    let config = SquatConfig {
        stand_prompt_angle: 170.0,
        ..SquatConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_squat_rejects_lockout_above_180() {
    let config = SquatConfig {
        lockout_angle: 190.0,
        ..SquatConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_jumping_jack_rejects_non_positive_thresholds() {
    let config = JumpingJackConfig {
        open_arm_ratio: 0.0,
        ..JumpingJackConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let config = JumpingJackConfig {
        coordination_weight: 0.7,
        range_weight: 0.5,
        ..JumpingJackConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_section_error_propagates_through_top_level_validate() {
    let config = FormAnalysisConfig {
        squat: SquatConfig {
            min_depth_angle: 0.0,
            ..SquatConfig::default()
        },
        ..FormAnalysisConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_custom_thresholds_flow_into_counters() {
    // lower the lockout so a 150-degree extension completes the cycle
    let config = PushupConfig {
        lockout_angle: 140.0,
        raise_prompt_angle: 120.0,
        ..PushupConfig::default()
    };
    assert!(config.validate().is_ok());

    let mut counter = PushupCounter::with_config(config);
    counter.analyze(&pose_frame(pushup_frame(80.0))).unwrap();
    let analysis = counter.analyze(&pose_frame(pushup_frame(150.0))).unwrap();
    assert_eq!(
        analysis.reps, 1,
        "configured lockout threshold should drive the rep transition"
    );

    // the default threshold would not have counted this cycle
    let mut default_counter = PushupCounter::new();
    default_counter
        .analyze(&pose_frame(pushup_frame(80.0)))
        .unwrap();
    let analysis = default_counter
        .analyze(&pose_frame(pushup_frame(150.0)))
        .unwrap();
    assert_eq!(analysis.reps, 0);
}
