//! Frame driver tying tilt input and collision dispatch together

use thiserror::Error;

use crate::core::config::{Config, ConfigError, EngineConfig};
use crate::foundation::collections::{EntityKey, ShapeKey};
use crate::game::AttitudeControl;
use crate::input::motion::{AttitudeDelta, OrientationEstimator, SensorSample};
use crate::physics::{CollisionDispatcher, CollisionError, CollisionWorld, DispatchStats};

/// Main engine struct
///
/// Owns the orientation estimator, the collision world and the dispatcher
/// with its single active policy. Sensor events and frame ticks are both
/// delivered on the game's update thread.
pub struct Engine {
    config: EngineConfig,
    estimator: OrientationEstimator,
    world: CollisionWorld,
    dispatcher: CollisionDispatcher,
    frame: u64,
}

/// Outcome of one [`Engine::tick`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Frame counter after this tick
    pub frame: u64,
    /// Collision dispatch counters
    pub stats: DispatchStats,
    /// Entities removed because they reported themselves destroyed
    pub destroyed: Vec<EntityKey>,
}

impl Engine {
    /// Create an engine with the default collision policy
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_dispatcher(config, CollisionDispatcher::default())
    }

    /// Create an engine with a caller-supplied collision policy
    pub fn with_dispatcher(
        config: EngineConfig,
        dispatcher: CollisionDispatcher,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("Initializing engine...");

        Ok(Self {
            estimator: OrientationEstimator::new(&config.motion),
            world: CollisionWorld::new(config.collision.clone()),
            dispatcher,
            config,
            frame: 0,
        })
    }

    /// Feed one raw sensor sample, steering `target` once calibrated
    pub fn on_sensor(
        &mut self,
        sample: &SensorSample,
        target: Option<&mut dyn AttitudeControl>,
    ) -> Option<AttitudeDelta> {
        self.estimator.on_sensor_changed(sample, target)
    }

    /// Capture the current attitude as neutral; only the first call counts
    pub fn recenter(&mut self) -> bool {
        self.estimator.read_sensor_for_norm()
    }

    /// Run collision dispatch over every shape pair, then drop destroyed entities
    pub fn tick(&mut self, delta: f32) -> Result<FrameReport, EngineError> {
        let pairs = self.world.all_pairs();
        self.tick_with_pairs(delta, &pairs)
    }

    /// Run collision dispatch over externally supplied candidate pairs
    pub fn tick_with_pairs(
        &mut self,
        delta: f32,
        pairs: &[(ShapeKey, ShapeKey)],
    ) -> Result<FrameReport, EngineError> {
        let stats = self.dispatcher.dispatch(&mut self.world, pairs, delta)?;
        let destroyed = self.world.remove_destroyed();
        self.frame += 1;

        Ok(FrameReport {
            frame: self.frame,
            stats,
            destroyed,
        })
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The orientation estimator
    pub fn estimator(&self) -> &OrientationEstimator {
        &self.estimator
    }

    /// The collision world
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Get mutable access to the collision world
    pub fn world_mut(&mut self) -> &mut CollisionWorld {
        &mut self.world
    }

    /// The collision dispatcher
    pub fn dispatcher(&self) -> &CollisionDispatcher {
        &self.dispatcher
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Collision bookkeeping error
    #[error("Collision error: {0}")]
    Collision(#[from] CollisionError),
}
