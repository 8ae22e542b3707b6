//! # Engine Configuration
//!
//! Tuning for the tilt controls and defaults for collision filtering.
//! Every structure is serde-derived so a game can ship it as TOML or RON and
//! load it through the [`Config`] trait.
//!
//! ```toml
//! [motion]
//! window_capacity = 5
//! scale = 0.003
//! pitch_gain = 2.0
//! roll_divisor = 2.5
//! remap = { swap_xy = true, invert = [false, false, false] }
//!
//! [collision]
//! default_layer = "PLAYER | ENEMY"
//! default_mask = "PLAYER | ENEMY"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::input::motion::AxisRemap;
use crate::physics::CollisionLayers;

/// Sensor smoothing and steering gains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Samples per moving-average window
    pub window_capacity: usize,
    /// Gain from smoothed offset to yaw
    pub scale: f32,
    /// Extra pitch gain on top of `scale`
    pub pitch_gain: f32,
    /// Divisor turning `scale` into the fixed roll step
    pub roll_divisor: f32,
    /// Device-to-control axis convention
    pub remap: AxisRemap,
}

impl MotionConfig {
    /// Fixed roll step used for quadrant offsets
    pub fn z_scale(&self) -> f32 {
        self.scale / self.roll_divisor
    }

    /// Reject gains that would make steering meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("scale", self.scale),
            ("pitch_gain", self.pitch_gain),
            ("roll_divisor", self.roll_divisor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "motion.{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            window_capacity: 5,
            scale: 0.003,
            pitch_gain: 2.0,
            roll_divisor: 2.5,
            remap: AxisRemap::default(),
        }
    }
}

/// Defaults applied to colliders registered without explicit layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Layer for new colliders
    pub default_layer: CollisionLayers,
    /// Mask for new colliders
    pub default_mask: CollisionLayers,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            default_layer: CollisionLayers::all(),
            default_mask: CollisionLayers::all(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tilt control tuning
    pub motion: MotionConfig,
    /// Collision defaults
    pub collision: CollisionConfig,
}

impl EngineConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::load_from_file(path)?;
        log::info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.motion.validate()
    }
}
