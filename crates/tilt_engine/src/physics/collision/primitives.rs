//! Primitive collision volumes and their pairwise intersection tests
//!
//! All volumes are expressed in world space. 2D games place everything on
//! the `z = 0` plane; the tests below behave identically there.

use crate::foundation::math::Vec3;

/// A bounding sphere (a circle when every center has `z = 0`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    ///
    /// Touching spheres count as intersecting.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if this sphere overlaps an axis-aligned box
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        let closest = aabb.closest_point(self.center);
        (closest - self.center).magnitude_squared() <= self.radius * self.radius
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new box from two corners in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Create a box centered at a point with given half-extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        let extents = extents.abs();
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents of the box
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Closest point inside the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.sup(&self.min).inf(&self.max)
    }

    /// Check if this box overlaps another box
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Move the box so its center lands on `center`
    pub fn recenter(&mut self, center: Vec3) {
        let extents = self.extents();
        self.min = center - extents;
        self.max = center + extents;
    }
}
