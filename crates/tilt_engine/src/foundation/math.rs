//! Math utilities and types
//!
//! Provides the fundamental math types used by the sensor and collision code.

pub use nalgebra::{
    Vector2, Vector3,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Lift a 2D position onto the `z = 0` plane used by 2D games
pub fn vec3_from_2d(v: Vec2) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Clamp a value to the range `[min, max]`
///
/// NaN is returned unchanged instead of snapping to a bound.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    value.max(min).min(max)
}
