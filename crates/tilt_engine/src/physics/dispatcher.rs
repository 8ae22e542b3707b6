//! Per-frame collision dispatch
//!
//! The dispatcher owns the one active collision policy for a game loop. It
//! is built explicitly and handed to whoever runs the frame, instead of being
//! reachable from a global.

use std::sync::Arc;

use crate::foundation::collections::ShapeKey;
use crate::physics::listener::{CollisionListener, SingleCollisionListener};
use crate::physics::world::{CollisionError, CollisionWorld};

/// Counters for one dispatch pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Candidate pairs examined
    pub candidates: usize,
    /// Pairs confirmed as colliding
    pub collisions: usize,
}

/// Runs the configured listener over candidate shape pairs
#[derive(Clone)]
pub struct CollisionDispatcher {
    listener: Arc<dyn CollisionListener>,
}

impl CollisionDispatcher {
    /// Dispatcher using a specific policy
    pub fn new(listener: Arc<dyn CollisionListener>) -> Self {
        Self { listener }
    }

    /// The active policy; every call returns the same instance
    pub fn default_listener(&self) -> &Arc<dyn CollisionListener> {
        &self.listener
    }

    /// Test one pair and react if it collides
    pub fn process_pair(
        &self,
        world: &mut CollisionWorld,
        a: ShapeKey,
        b: ShapeKey,
        delta: f32,
    ) -> Result<bool, CollisionError> {
        let (shape1, shape2, entities) = world.pair_with_entities(a, b)?;
        if !self.listener.is_collide(shape1, shape2, delta) {
            return Ok(false);
        }
        self.listener.on_collide(shape1, shape2, delta, entities);
        Ok(true)
    }

    /// Process every candidate pair for one frame
    ///
    /// Every key is checked before the first pair runs, so a stale key leaves
    /// all entities untouched.
    pub fn dispatch(
        &self,
        world: &mut CollisionWorld,
        pairs: &[(ShapeKey, ShapeKey)],
        delta: f32,
    ) -> Result<DispatchStats, CollisionError> {
        if let Some(stale) = pairs
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .find(|&key| !world.contains_shape(key))
        {
            log::warn!("Collision dispatch rejected: stale shape {:?}", stale);
            return Err(CollisionError::UnknownShape(stale));
        }

        let mut stats = DispatchStats::default();
        for &(a, b) in pairs {
            stats.candidates += 1;
            if self.process_pair(world, a, b, delta)? {
                stats.collisions += 1;
            }
        }

        log::debug!(
            "Collision dispatch: {} candidates, {} collisions",
            stats.candidates,
            stats.collisions
        );
        Ok(stats)
    }
}

impl Default for CollisionDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(SingleCollisionListener))
    }
}

impl std::fmt::Debug for CollisionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionDispatcher").finish_non_exhaustive()
    }
}
