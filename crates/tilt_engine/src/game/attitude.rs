//! Attitude of a tilt-controlled entity

use crate::foundation::math::{clamp, Quat, Vec3};

/// Something that can be steered by yaw, pitch and roll increments
pub trait AttitudeControl {
    /// Rotate around the vertical axis
    fn yaw(&mut self, amount: f32);

    /// Rotate around the lateral axis
    fn pitch(&mut self, amount: f32);

    /// Rotate around the longitudinal axis
    fn roll(&mut self, amount: f32);
}

/// Accumulated Euler angles (radians) of a controlled craft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    /// Heading around the vertical axis
    pub yaw: f32,
    /// Nose up/down
    pub pitch: f32,
    /// Bank left/right
    pub roll: f32,
    /// Symmetric pitch clamp, `None` for unlimited
    pub pitch_limit: Option<f32>,
}

impl Default for Attitude {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            pitch_limit: None,
        }
    }
}

impl Attitude {
    /// Level attitude with no limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp pitch to `[-limit, limit]`
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = Some(limit.abs());
        self
    }

    /// Orientation as a unit quaternion (roll, pitch, yaw order)
    pub fn orientation(&self) -> Quat {
        Quat::from_euler_angles(self.roll, self.pitch, self.yaw)
    }

    /// Direction the craft's nose points, starting from +X
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::x()
    }
}

impl AttitudeControl for Attitude {
    fn yaw(&mut self, amount: f32) {
        self.yaw += amount;
    }

    fn pitch(&mut self, amount: f32) {
        self.pitch += amount;
        if let Some(limit) = self.pitch_limit {
            self.pitch = clamp(self.pitch, -limit, limit);
        }
    }

    fn roll(&mut self, amount: f32) {
        self.roll += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_increments_accumulate() {
        let mut attitude = Attitude::new();
        attitude.yaw(0.1);
        attitude.yaw(0.2);
        attitude.roll(-0.5);

        assert_relative_eq!(attitude.yaw, 0.3, epsilon = 1e-6);
        assert_relative_eq!(attitude.roll, -0.5);
    }

    #[test]
    fn test_pitch_limit() {
        let mut attitude = Attitude::new().with_pitch_limit(0.25);
        attitude.pitch(1.0);
        assert_relative_eq!(attitude.pitch, 0.25);
        attitude.pitch(-3.0);
        assert_relative_eq!(attitude.pitch, -0.25);
    }

    #[test]
    fn test_pitch_limit_leaves_nan_visible() {
        let mut attitude = Attitude::new().with_pitch_limit(0.5);
        attitude.pitch(f32::NAN);
        assert!(attitude.pitch.is_nan());
    }

    #[test]
    fn test_quarter_yaw_turns_forward_to_y() {
        let mut attitude = Attitude::new();
        attitude.yaw(FRAC_PI_2);
        assert_relative_eq!(attitude.forward(), Vec3::y(), epsilon = 1e-6);
    }
}
