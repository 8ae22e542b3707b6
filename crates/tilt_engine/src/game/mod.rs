//! Game-facing capabilities: steerable attitude and collision reactions

pub mod attitude;
pub mod entity;

pub use attitude::{Attitude, AttitudeControl};
pub use entity::{EntityStore, GameEntity};
