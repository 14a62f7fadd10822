//! Immutable tuning for a [`ScrollRig`](crate::ScrollRig).
//!
//! The numbers were tuned by eye; treat them as knobs rather than invariants.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must be > 0 (got {value})")]
    NonPositiveRate { field: &'static str, value: f32 },
    #[error("journey_depth must be >= 0 (got {value})")]
    NegativeDepth { value: f32 },
}

/// Every constant the rig uses to turn progress into a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RigConfig {
    pub damping_rate: f32,
    pub journey_depth: f32,
    pub lateral_amplitude: f32,
    pub camera_base_height: f32,
    pub camera_height_drop: f32,
    pub camera_base_depth: f32,
    pub camera_depth_pull_in: f32,
    pub camera_follow_rate: f32,
    pub look_at_base_height: f32,
    pub look_at_drop: f32,
    pub glow_trail: f32,
    pub glow_base_scale: f32,
    pub glow_scale_gain: f32,
    pub glow_base_opacity: f32,
    pub glow_opacity_gain: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            damping_rate: DAMPING_RATE,
            journey_depth: JOURNEY_DEPTH,
            lateral_amplitude: LATERAL_AMPLITUDE,
            camera_base_height: CAMERA_BASE_HEIGHT,
            camera_height_drop: CAMERA_HEIGHT_DROP,
            camera_base_depth: CAMERA_BASE_DEPTH,
            camera_depth_pull_in: CAMERA_DEPTH_PULL_IN,
            camera_follow_rate: CAMERA_FOLLOW_RATE,
            look_at_base_height: LOOK_AT_BASE_HEIGHT,
            look_at_drop: LOOK_AT_DROP,
            glow_trail: GLOW_TRAIL,
            glow_base_scale: GLOW_BASE_SCALE,
            glow_scale_gain: GLOW_SCALE_GAIN,
            glow_base_opacity: GLOW_BASE_OPACITY,
            glow_opacity_gain: GLOW_OPACITY_GAIN,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        for (field, value) in [
            ("damping_rate", self.damping_rate),
            ("camera_follow_rate", self.camera_follow_rate),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveRate { field, value });
            }
        }
        if self.journey_depth < 0.0 {
            return Err(ConfigError::NegativeDepth {
                value: self.journey_depth,
            });
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 15] {
        [
            ("damping_rate", self.damping_rate),
            ("journey_depth", self.journey_depth),
            ("lateral_amplitude", self.lateral_amplitude),
            ("camera_base_height", self.camera_base_height),
            ("camera_height_drop", self.camera_height_drop),
            ("camera_base_depth", self.camera_base_depth),
            ("camera_depth_pull_in", self.camera_depth_pull_in),
            ("camera_follow_rate", self.camera_follow_rate),
            ("look_at_base_height", self.look_at_base_height),
            ("look_at_drop", self.look_at_drop),
            ("glow_trail", self.glow_trail),
            ("glow_base_scale", self.glow_base_scale),
            ("glow_scale_gain", self.glow_scale_gain),
            ("glow_base_opacity", self.glow_base_opacity),
            ("glow_opacity_gain", self.glow_opacity_gain),
        ]
    }
}
