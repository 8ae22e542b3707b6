//! Orientation estimator: smoothed sensor axes to yaw/pitch/roll deltas.
//!
//! Raw gravity samples are noisy at frame rate, so each control axis runs
//! through its own [`MovingAverage`]. Once the player recenters, the current
//! smoothed attitude becomes the norm and every later sample steers the
//! controlled entity by its offset from that norm.

use crate::core::config::MotionConfig;
use crate::foundation::math::Vec3;
use crate::game::AttitudeControl;

use super::moving_average::MovingAverage;
use super::remap::{AxisRemap, SensorSample};

/// Calibration lifecycle. `Calibrated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationState {
    /// No baseline captured yet; samples only feed the filters.
    Uncalibrated,
    /// Baseline attitude captured by the first recenter.
    Calibrated {
        /// Smoothed axes at the moment of calibration.
        norm: Vec3,
    },
}

/// Control increments produced by one sensor sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeDelta {
    /// Yaw increment.
    pub yaw: f32,
    /// Pitch increment.
    pub pitch: f32,
    /// Roll increment.
    pub roll: f32,
}

impl AttitudeDelta {
    /// Applies the increments to a controlled entity, yaw first.
    pub fn apply_to(&self, target: &mut dyn AttitudeControl) {
        target.yaw(self.yaw);
        target.pitch(self.pitch);
        target.roll(self.roll);
    }
}

/// Roll increment for the offsets `(dx, dy)`.
///
/// Each strict quadrant maps to a fixed `±z_scale` that follows the sign of
/// `dy`. When either offset is exactly zero (or NaN) the raw `dz` is passed
/// through unscaled.
pub fn quadrant_roll(dx: f32, dy: f32, dz: f32, z_scale: f32) -> f32 {
    if dx > 0.0 && dy > 0.0 {
        z_scale
    } else if dx < 0.0 && dy < 0.0 {
        -z_scale
    } else if dx > 0.0 && dy < 0.0 {
        -z_scale
    } else if dx < 0.0 && dy > 0.0 {
        z_scale
    } else {
        dz
    }
}

/// Turns a stream of raw samples into attitude deltas for one controlled entity.
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    axes: [MovingAverage; 3],
    remap: AxisRemap,
    scale: f32,
    pitch_gain: f32,
    z_scale: f32,
    state: CalibrationState,
}

impl OrientationEstimator {
    /// Creates an uncalibrated estimator.
    pub fn new(config: &MotionConfig) -> Self {
        let capacity = config.window_capacity;
        Self {
            axes: [
                MovingAverage::new(capacity),
                MovingAverage::new(capacity),
                MovingAverage::new(capacity),
            ],
            remap: config.remap,
            scale: config.scale,
            pitch_gain: config.pitch_gain,
            z_scale: config.z_scale(),
            state: CalibrationState::Uncalibrated,
        }
    }

    /// Axis convention used for every sample.
    pub fn remap(&self) -> AxisRemap {
        self.remap
    }

    /// Current calibration state.
    pub fn state(&self) -> CalibrationState {
        self.state
    }

    /// Whether a norm has been captured.
    pub fn is_calibrated(&self) -> bool {
        matches!(self.state, CalibrationState::Calibrated { .. })
    }

    /// Captured norm, if calibrated.
    pub fn norm(&self) -> Option<Vec3> {
        match self.state {
            CalibrationState::Calibrated { norm } => Some(norm),
            CalibrationState::Uncalibrated => None,
        }
    }

    /// Smoothed control axes. Components are NaN until a sample arrives.
    pub fn smoothed(&self) -> Vec3 {
        Vec3::new(
            self.axes[0].average(),
            self.axes[1].average(),
            self.axes[2].average(),
        )
    }

    /// Offset of the smoothed axes from the norm, if calibrated.
    pub fn offset_from_norm(&self) -> Option<Vec3> {
        self.norm().map(|norm| self.smoothed() - norm)
    }

    /// Captures the current smoothed attitude as the norm.
    ///
    /// Only the first call has an effect; returns whether this call captured.
    pub fn read_sensor_for_norm(&mut self) -> bool {
        if self.is_calibrated() {
            log::debug!("Recenter ignored, norm already captured");
            return false;
        }

        if self.axes.iter().any(MovingAverage::is_empty) {
            log::warn!("Capturing norm before any sensor sample; control deltas will be NaN");
        }

        let norm = self.smoothed();
        log::info!("Captured orientation norm ({:.3}, {:.3}, {:.3})", norm.x, norm.y, norm.z);
        self.state = CalibrationState::Calibrated { norm };
        true
    }

    /// Computes the delta for offsets from the norm.
    pub fn delta_for_offset(&self, offset: Vec3) -> AttitudeDelta {
        AttitudeDelta {
            yaw: offset.x * self.scale,
            pitch: offset.y * self.scale * self.pitch_gain,
            roll: quadrant_roll(offset.x, offset.y, offset.z, self.z_scale),
        }
    }

    /// Feeds one raw sample and, once calibrated, steers `target`.
    ///
    /// Returns the applied delta, or `None` while uncalibrated.
    pub fn on_sensor_changed(
        &mut self,
        sample: &SensorSample,
        target: Option<&mut dyn AttitudeControl>,
    ) -> Option<AttitudeDelta> {
        let remapped = self.remap.apply(sample);
        for (axis, value) in self.axes.iter_mut().zip(remapped.iter()) {
            axis.add(*value);
        }

        let offset = self.offset_from_norm()?;
        let delta = self.delta_for_offset(offset);
        log::trace!("Attitude delta {:?}", delta);

        if let Some(target) = target {
            delta.apply_to(target);
        }
        Some(delta)
    }
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new(&MotionConfig::default())
    }
}
