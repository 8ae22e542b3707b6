//! Tilt input: raw orientation samples to steering deltas
//!
//! - [`moving_average`] - Sliding-window noise filter
//! - [`remap`] - Raw samples and device axis conventions
//! - [`estimator`] - Calibration and yaw/pitch/roll computation

pub mod estimator;
pub mod moving_average;
pub mod remap;

pub use estimator::{quadrant_roll, AttitudeDelta, CalibrationState, OrientationEstimator};
pub use moving_average::MovingAverage;
pub use remap::{AxisRemap, SensorSample};
