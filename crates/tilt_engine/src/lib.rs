//! # Tilt Engine
//!
//! Motion-sensing and collision core for small 2D/3D games steered by
//! tilting the device.
//!
//! ## Features
//!
//! - **Tilt input**: Smooths raw orientation samples and turns them into
//!   yaw/pitch/roll increments relative to a player-chosen neutral pose
//! - **Collision dispatch**: Narrow-phase shape tests with pluggable
//!   policies and double-dispatch entity reactions
//! - **Configuration**: TOML/RON engine settings
//!
//! ## Quick Start
//!
//! ```rust
//! use tilt_engine::prelude::*;
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! let mut attitude = Attitude::new();
//!
//! engine.on_sensor(&SensorSample::new(0.0, 0.0, 9.8), Some(&mut attitude));
//! engine.recenter();
//! engine.on_sensor(&SensorSample::new(0.5, 0.2, 9.8), Some(&mut attitude));
//!
//! let report = engine.tick(1.0 / 60.0).unwrap();
//! assert_eq!(report.frame, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod foundation;
pub mod config;
pub mod input;
pub mod game;
pub mod physics;

mod engine;

#[cfg(test)]
mod tests;

pub use engine::{Engine, EngineError, FrameReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError, FrameReport,
        foundation::{
            collections::{EntityKey, PropKey, ShapeKey},
            math::{Vec2, Vec3, Quat},
        },
        game::{Attitude, AttitudeControl, GameEntity},
        input::motion::{AttitudeDelta, AxisRemap, OrientationEstimator, SensorSample},
        physics::{
            Collider, CollisionDispatcher, CollisionLayers, CollisionListener, CollisionShape,
            CollisionWorld, LayerFilterListener, SingleCollisionListener,
        },
        core::config::{Config, EngineConfig, MotionConfig},
    };
}
