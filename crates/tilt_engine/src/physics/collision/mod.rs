//! Narrow-phase collision geometry
//!
//! - [`primitives`] - Spheres and axis-aligned boxes with overlap tests
//! - [`shape`] - Shapes bound to their owners as colliders

pub mod primitives;
pub mod shape;

pub use primitives::{Aabb, BoundingSphere};
pub use shape::{Collider, CollisionShape, ShapeOwner};
