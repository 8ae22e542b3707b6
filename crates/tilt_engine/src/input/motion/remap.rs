//! Raw sensor samples and the device-to-control axis convention.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// One raw 3-axis reading as delivered by the device sensor service.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSample {
    /// Axis readings in device order.
    pub values: [f32; 3],
}

impl SensorSample {
    /// Builds a sample from the three device axes.
    pub const fn new(axis0: f32, axis1: f32, axis2: f32) -> Self {
        Self {
            values: [axis0, axis1, axis2],
        }
    }
}

impl From<[f32; 3]> for SensorSample {
    fn from(values: [f32; 3]) -> Self {
        Self { values }
    }
}

/// Maps device axes onto control axes.
///
/// Applied after an optional x/y swap: `invert` flips the sign of the
/// resulting x, y and z respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRemap {
    /// Exchange device axes 0 and 1.
    pub swap_xy: bool,
    /// Per-axis sign flip, applied after the swap.
    pub invert: [bool; 3],
}

impl AxisRemap {
    /// Device axes used as-is.
    pub const IDENTITY: Self = Self {
        swap_xy: false,
        invert: [false; 3],
    };

    /// Device held sideways: tilt left/right comes from axis 1.
    pub const LANDSCAPE: Self = Self {
        swap_xy: true,
        invert: [false; 3],
    };

    /// Landscape with the lateral axis flipped, for devices rotated the
    /// other way round.
    pub const LANDSCAPE_FLIPPED: Self = Self {
        swap_xy: true,
        invert: [true, false, false],
    };

    /// Remaps one raw sample into control space.
    pub fn apply(&self, sample: &SensorSample) -> Vec3 {
        let [a, b, c] = sample.values;
        let (x, y) = if self.swap_xy { (b, a) } else { (a, b) };
        let sign = |flip: bool| if flip { -1.0 } else { 1.0 };

        Vec3::new(
            x * sign(self.invert[0]),
            y * sign(self.invert[1]),
            c * sign(self.invert[2]),
        )
    }
}

impl Default for AxisRemap {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let sample = SensorSample::new(1.0, 2.0, 3.0);

        assert_eq!(AxisRemap::IDENTITY.apply(&sample), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(AxisRemap::LANDSCAPE.apply(&sample), Vec3::new(2.0, 1.0, 3.0));
        assert_eq!(AxisRemap::LANDSCAPE_FLIPPED.apply(&sample), Vec3::new(-2.0, 1.0, 3.0));
    }
}
