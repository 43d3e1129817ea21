// ABOUTME: Form-analysis threshold configuration for the exercise counters
// ABOUTME: Configures hysteresis bands, feedback thresholds, and scoring weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form-Analysis Configuration
//!
//! Provides per-exercise threshold configuration for repetition detection and
//! form scoring. Defaults carry the tuned values the feedback copy and score
//! bands were calibrated against; `validate()` rejects configurations that
//! would break the counters' hysteresis invariants.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tolerance when checking that scoring weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Form-Analysis Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormAnalysisConfig {
    /// Push-up counter thresholds
    pub pushup: PushupConfig,
    /// Squat counter thresholds
    pub squat: SquatConfig,
    /// Jumping-jack counter thresholds
    pub jumping_jack: JumpingJackConfig,
}

impl FormAnalysisConfig {
    /// Validate every per-exercise section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pushup.validate()?;
        self.squat.validate()?;
        self.jumping_jack.validate()
    }
}

/// Push-up counter thresholds (elbow angle, degrees)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushupConfig {
    /// Arm angle below which the up phase transitions to down
    pub descent_angle: f64,
    /// Arm angle above which the down phase transitions to up, counting a rep
    pub lockout_angle: f64,
    /// Arm angle below which depth is flagged as unsafe
    pub min_depth_angle: f64,
    /// Arm angle above which an incomplete extension is prompted
    pub raise_prompt_angle: f64,
    /// Body alignment score below which a sagging warning is emitted
    pub alignment_warning_score: f64,
    /// Weight of the arm-angle score in the combined form score (0.0-1.0)
    pub angle_weight: f64,
    /// Weight of the body-alignment score in the combined form score (0.0-1.0)
    pub alignment_weight: f64,
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            descent_angle: 90.0,
            lockout_angle: 160.0,
            min_depth_angle: 60.0,
            raise_prompt_angle: 120.0,
            alignment_warning_score: 70.0,
            angle_weight: 0.7,
            alignment_weight: 0.3,
        }
    }
}

impl PushupConfig {
    /// Validate threshold ordering and scoring weights.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for broken hysteresis ordering and
    /// `ConfigError::InvalidWeights` when the weights don't sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_depth_angle <= 0.0 || self.min_depth_angle >= self.descent_angle {
            return Err(ConfigError::InvalidRange(
                "pushup min_depth_angle must be in (0, descent_angle)",
            ));
        }
        if self.descent_angle >= self.lockout_angle {
            return Err(ConfigError::InvalidRange(
                "pushup descent_angle must be below lockout_angle",
            ));
        }
        if self.lockout_angle > 180.0 {
            return Err(ConfigError::InvalidRange(
                "pushup lockout_angle must not exceed 180 degrees",
            ));
        }
        if self.raise_prompt_angle >= self.lockout_angle {
            return Err(ConfigError::InvalidRange(
                "pushup raise_prompt_angle must be below lockout_angle",
            ));
        }
        if !(0.0..=100.0).contains(&self.alignment_warning_score) {
            return Err(ConfigError::InvalidRange(
                "pushup alignment_warning_score must be in [0, 100]",
            ));
        }
        if self.angle_weight < 0.0
            || self.alignment_weight < 0.0
            || (self.angle_weight + self.alignment_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE
        {
            return Err(ConfigError::InvalidWeights(
                "pushup angle_weight and alignment_weight must be non-negative and sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// Squat counter thresholds (knee angle, degrees)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquatConfig {
    /// Knee angle below which the up phase transitions to down
    pub descent_angle: f64,
    /// Knee angle above which the down phase transitions to up, counting a rep
    pub lockout_angle: f64,
    /// Knee angle below which depth is flagged as excessive
    pub min_depth_angle: f64,
    /// Knee angle above which an incomplete stand is prompted
    pub stand_prompt_angle: f64,
}

impl Default for SquatConfig {
    fn default() -> Self {
        Self {
            descent_angle: 120.0,
            lockout_angle: 160.0,
            min_depth_angle: 80.0,
            stand_prompt_angle: 130.0,
        }
    }
}

impl SquatConfig {
    /// Validate threshold ordering.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for broken hysteresis ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_depth_angle <= 0.0 || self.min_depth_angle >= self.descent_angle {
            return Err(ConfigError::InvalidRange(
                "squat min_depth_angle must be in (0, descent_angle)",
            ));
        }
        if self.descent_angle >= self.lockout_angle {
            return Err(ConfigError::InvalidRange(
                "squat descent_angle must be below lockout_angle",
            ));
        }
        if self.lockout_angle > 180.0 {
            return Err(ConfigError::InvalidRange(
                "squat lockout_angle must not exceed 180 degrees",
            ));
        }
        if self.stand_prompt_angle >= self.lockout_angle {
            return Err(ConfigError::InvalidRange(
                "squat stand_prompt_angle must be below lockout_angle",
            ));
        }
        Ok(())
    }
}

/// Jumping-jack counter thresholds (spread-to-height ratios)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpingJackConfig {
    /// Arm spread ratio above which the arms count as open
    pub open_arm_ratio: f64,
    /// Leg spread ratio above which the legs count as open
    pub open_leg_ratio: f64,
    /// Arm spread ratio below which higher arms are prompted
    pub min_arm_ratio: f64,
    /// Leg spread ratio below which wider legs are prompted
    pub min_leg_ratio: f64,
    /// Arm/leg ratio difference above which a coordination prompt is emitted
    pub coordination_tolerance: f64,
    /// Weight of the coordination score in the combined form score (0.0-1.0)
    pub coordination_weight: f64,
    /// Weight of the range-of-motion score in the combined form score (0.0-1.0)
    pub range_weight: f64,
}

impl Default for JumpingJackConfig {
    fn default() -> Self {
        Self {
            open_arm_ratio: 0.3,
            open_leg_ratio: 0.2,
            min_arm_ratio: 0.2,
            min_leg_ratio: 0.15,
            coordination_tolerance: 0.1,
            coordination_weight: 0.6,
            range_weight: 0.4,
        }
    }
}

impl JumpingJackConfig {
    /// Validate ratio thresholds and scoring weights.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for non-positive thresholds and
    /// `ConfigError::InvalidWeights` when the weights don't sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.open_arm_ratio <= 0.0 || self.open_leg_ratio <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "jumping jack open ratios must be positive",
            ));
        }
        if self.min_arm_ratio < 0.0 || self.min_leg_ratio < 0.0 {
            return Err(ConfigError::InvalidRange(
                "jumping jack minimum ratios must be non-negative",
            ));
        }
        if self.coordination_tolerance <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "jumping jack coordination_tolerance must be positive",
            ));
        }
        if self.coordination_weight < 0.0
            || self.range_weight < 0.0
            || (self.coordination_weight + self.range_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE
        {
            return Err(ConfigError::InvalidWeights(
                "jumping jack coordination_weight and range_weight must be non-negative and sum to 1.0",
            ));
        }
        Ok(())
    }
}
