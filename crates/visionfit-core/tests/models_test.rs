// ABOUTME: Tests for landmark, pose frame, and exercise type models
// ABOUTME: Covers frame-size validation, finite-coordinate checks, and selector parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use visionfit_core::constants::{landmark_indices, POSE_LANDMARK_COUNT};
use visionfit_core::errors::AnalysisError;
use visionfit_core::models::{ExerciseType, Landmark, PoseFrame};

fn full_frame() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5); POSE_LANDMARK_COUNT]
}

// === PoseFrame Construction Tests ===

#[test]
fn test_pose_frame_accepts_full_landmark_set() {
    let frame = PoseFrame::new(full_frame());
    assert!(frame.is_ok(), "33-landmark frame should be accepted");
    assert_eq!(frame.unwrap().len(), POSE_LANDMARK_COUNT);
}

#[test]
fn test_pose_frame_rejects_undersized_sequence() {
    let landmarks = vec![Landmark::new(0.5, 0.5); 10];
    let error = PoseFrame::new(landmarks).unwrap_err();

    assert_eq!(
        error,
        AnalysisError::InsufficientLandmarks {
            expected: 33,
            actual: 10
        },
        "undersized frame should report both counts"
    );
    assert_eq!(
        error.to_string(),
        "Insufficient landmarks detected: expected 33, got 10"
    );
}

#[test]
fn test_pose_frame_rejects_empty_sequence() {
    let error = PoseFrame::new(Vec::new()).unwrap_err();
    assert!(matches!(
        error,
        AnalysisError::InsufficientLandmarks { actual: 0, .. }
    ));
}

#[test]
fn test_pose_frame_try_from_matches_constructor() {
    assert!(PoseFrame::try_from(full_frame()).is_ok());
    assert!(PoseFrame::try_from(vec![Landmark::new(0.0, 0.0); 5]).is_err());
}

#[test]
fn test_pose_frame_deserialization_validates_length() {
    let full = serde_json::to_string(&full_frame()).unwrap();
    assert!(serde_json::from_str::<PoseFrame>(&full).is_ok());

    let short = serde_json::to_string(&vec![Landmark::new(0.5, 0.5); 10]).unwrap();
    let error = serde_json::from_str::<PoseFrame>(&short).unwrap_err();
    assert!(
        error.to_string().contains("Insufficient landmarks detected"),
        "undersized wire frames must be rejected on deserialization"
    );
}

// === Landmark Validation Tests ===

#[test]
fn test_require_returns_finite_landmark() {
    let mut landmarks = full_frame();
    landmarks[landmark_indices::NOSE] = Landmark::new(0.25, 0.75);
    let frame = PoseFrame::new(landmarks).unwrap();

    let nose = frame.require(landmark_indices::NOSE, "nose").unwrap();
    assert!((nose.x - 0.25).abs() < f64::EPSILON);
    assert!((nose.y - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_require_rejects_nan_coordinate() {
    let mut landmarks = full_frame();
    landmarks[landmark_indices::LEFT_WRIST] = Landmark::new(f64::NAN, 0.5);
    let frame = PoseFrame::new(landmarks).unwrap();

    let error = frame
        .require(landmark_indices::LEFT_WRIST, "left_wrist")
        .unwrap_err();
    assert_eq!(
        error,
        AnalysisError::InvalidLandmark {
            index: landmark_indices::LEFT_WRIST,
            name: "left_wrist"
        }
    );
}

#[test]
fn test_require_rejects_infinite_coordinate() {
    let mut landmarks = full_frame();
    landmarks[landmark_indices::RIGHT_HIP] = Landmark::new(0.5, f64::INFINITY);
    let frame = PoseFrame::new(landmarks).unwrap();

    assert!(frame
        .require(landmark_indices::RIGHT_HIP, "right_hip")
        .is_err());
}

#[test]
fn test_landmark_is_finite() {
    assert!(Landmark::new(0.5, 0.5).is_finite());
    assert!(Landmark::new(-2.0, 3.5).is_finite());
    assert!(!Landmark::new(f64::NAN, 0.5).is_finite());
    assert!(!Landmark::new(0.5, f64::NEG_INFINITY).is_finite());
}

// === Landmark Serialization Tests ===

#[test]
fn test_landmark_deserializes_without_visibility() {
    let landmark: Landmark = serde_json::from_str(r#"{"x": 0.4, "y": 0.6}"#).unwrap();
    assert!((landmark.x - 0.4).abs() < f64::EPSILON);
    assert!(landmark.visibility.is_none());
}

#[test]
fn test_landmark_serialization_skips_absent_visibility() {
    let json = serde_json::to_value(Landmark::new(0.1, 0.2)).unwrap();
    assert!(
        json.get("visibility").is_none(),
        "absent visibility should not serialize"
    );

    let with_visibility = Landmark {
        x: 0.1,
        y: 0.2,
        visibility: Some(0.9),
    };
    let json = serde_json::to_value(with_visibility).unwrap();
    assert!((json["visibility"].as_f64().unwrap() - 0.9).abs() < f64::EPSILON);
}

// === ExerciseType Tests ===

#[test]
fn test_exercise_type_parses_canonical_selectors() {
    assert_eq!("pushup".parse::<ExerciseType>().unwrap(), ExerciseType::Pushup);
    assert_eq!("squat".parse::<ExerciseType>().unwrap(), ExerciseType::Squat);
    assert_eq!(
        "jumping_jack".parse::<ExerciseType>().unwrap(),
        ExerciseType::JumpingJack
    );
}

#[test]
fn test_exercise_type_parses_aliases_case_insensitively() {
    assert_eq!(
        "Push-Up".parse::<ExerciseType>().unwrap(),
        ExerciseType::Pushup
    );
    assert_eq!(
        "JUMPING-JACK".parse::<ExerciseType>().unwrap(),
        ExerciseType::JumpingJack
    );
}

#[test]
fn test_exercise_type_rejects_unknown_selector() {
    let error = "pogo-stick".parse::<ExerciseType>().unwrap_err();
    assert_eq!(
        error,
        AnalysisError::UnsupportedExercise {
            exercise_type: "pogo-stick".to_owned()
        }
    );
    assert_eq!(error.to_string(), "Unsupported exercise type: pogo-stick");
}

#[test]
fn test_exercise_type_display_round_trips() {
    for exercise in ExerciseType::ALL {
        let parsed = exercise.to_string().parse::<ExerciseType>().unwrap();
        assert_eq!(parsed, exercise, "display form should parse back");
    }
}

#[test]
fn test_exercise_type_serde_uses_snake_case() {
    let json = serde_json::to_string(&ExerciseType::JumpingJack).unwrap();
    assert_eq!(json, "\"jumping_jack\"");

    let parsed: ExerciseType = serde_json::from_str("\"pushup\"").unwrap();
    assert_eq!(parsed, ExerciseType::Pushup);
}
