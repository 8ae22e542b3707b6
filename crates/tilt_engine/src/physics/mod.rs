//! Physics module for collision detection and dispatch
//!
//! Narrow-phase only: callers hand in candidate shape pairs each frame and
//! the [`CollisionDispatcher`] runs the active [`CollisionListener`] on them.
//! Collision response (impulses, velocities) is left to the game.

pub mod collision;
pub mod collision_layers;
pub mod dispatcher;
pub mod listener;
pub mod world;

pub use collision::{
    Aabb,
    BoundingSphere,
    Collider,
    CollisionShape,
    ShapeOwner,
};
pub use collision_layers::CollisionLayers;
pub use dispatcher::{CollisionDispatcher, DispatchStats};
pub use listener::{CollisionListener, LayerFilterListener, SingleCollisionListener};
pub use world::{CollisionError, CollisionWorld};
