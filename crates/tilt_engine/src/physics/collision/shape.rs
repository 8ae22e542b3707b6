//! Collision shapes and the colliders that bind them to their owners

use crate::foundation::collections::{EntityKey, PropKey};
use crate::foundation::math::Vec3;
use crate::physics::collision_layers::CollisionLayers;
use super::primitives::{Aabb, BoundingSphere};

/// Geometry of a collider in world space
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// A sphere (or circle on the `z = 0` plane)
    Sphere(BoundingSphere),
    /// An axis-aligned box (or rectangle on the `z = 0` plane)
    Box(Aabb),
}

impl CollisionShape {
    /// Creates a spherical shape
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere(BoundingSphere::new(center, radius))
    }

    /// Creates a box shape from its center and half-extents
    pub fn cuboid(center: Vec3, half_extents: Vec3) -> Self {
        Self::Box(Aabb::from_center_extents(center, half_extents))
    }

    /// Get center position
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Box(aabb) => aabb.center(),
        }
    }

    /// Move the shape so its center lands on `center`
    pub fn set_center(&mut self, center: Vec3) {
        match self {
            Self::Sphere(sphere) => sphere.center = center,
            Self::Box(aabb) => aabb.recenter(center),
        }
    }

    /// Shift the shape by `offset`
    pub fn translate(&mut self, offset: Vec3) {
        let center = self.center() + offset;
        self.set_center(center);
    }

    /// Test if this shape intersects with another shape
    ///
    /// Symmetric: `a.is_intersect(b) == b.is_intersect(a)` for every pair.
    pub fn is_intersect(&self, other: &CollisionShape) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects(b),
            (Self::Box(a), Self::Box(b)) => a.intersects(b),
            (Self::Sphere(sphere), Self::Box(aabb)) |
            (Self::Box(aabb), Self::Sphere(sphere)) => sphere.intersects_aabb(aabb),
        }
    }
}

/// Who owns a collider, resolved once when the shape is registered
///
/// Only `Entity` owners take part in collision reactions; `Passive` owners
/// still block and are still tested, but never receive a `collide` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeOwner {
    /// Owned by a game entity that reacts to collisions
    Entity(EntityKey),
    /// Owned by a scene prop without collision behaviour
    Passive(PropKey),
}

impl ShapeOwner {
    /// The entity key, if the owner is collide-capable
    pub fn entity(&self) -> Option<EntityKey> {
        match self {
            Self::Entity(key) => Some(*key),
            Self::Passive(_) => None,
        }
    }
}

impl From<EntityKey> for ShapeOwner {
    fn from(key: EntityKey) -> Self {
        Self::Entity(key)
    }
}

impl From<PropKey> for ShapeOwner {
    fn from(key: PropKey) -> Self {
        Self::Passive(key)
    }
}

/// A registered shape together with its owner and filtering data
#[derive(Debug, Clone)]
pub struct Collider {
    /// World-space geometry
    pub shape: CollisionShape,
    /// Back-reference to the owning object
    pub owner: ShapeOwner,
    /// Layers this collider sits on
    pub layer: CollisionLayers,
    /// Layers this collider is willing to touch
    pub mask: CollisionLayers,
}

impl Collider {
    /// Create a collider on every layer
    pub fn new(shape: CollisionShape, owner: impl Into<ShapeOwner>) -> Self {
        Self {
            shape,
            owner: owner.into(),
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
        }
    }

    /// Create a collider with specific layer and mask
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Geometric intersection with another collider
    pub fn is_intersect(&self, other: &Collider) -> bool {
        self.shape.is_intersect(&other.shape)
    }
}
