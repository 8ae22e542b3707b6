//! Collision layer system for filtering collision detection
//!
//! Every collider sits on one or more layers and carries a mask of the
//! layers it is willing to touch. A pair is only considered when each side
//! accepts the other.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Collision layer bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CollisionLayers: u32 {
        /// Player-controlled craft
        const PLAYER = 1 << 0;
        /// Hostile entities
        const ENEMY = 1 << 1;
        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 2;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;
        /// Trigger volumes
        const TRIGGER = 1 << 4;
        /// Debris and small objects
        const DEBRIS = 1 << 5;
        /// Pickups and collectibles
        const PICKUP = 1 << 6;
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::all()
    }
}

impl CollisionLayers {
    /// Check if two colliders should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask and B's layer must be in A's mask.
    pub fn should_collide(
        layer_a: CollisionLayers,
        mask_a: CollisionLayers,
        layer_b: CollisionLayers,
        mask_b: CollisionLayers,
    ) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }

    /// Helper to create a mask from multiple layers
    pub fn mask(layers: &[CollisionLayers]) -> CollisionLayers {
        layers.iter().fold(CollisionLayers::empty(), |acc, &layer| acc | layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player wants the enemy, the enemy only listens for projectiles
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::PROJECTILE,
        ));
    }

    #[test]
    fn test_mask_creation() {
        let mask = CollisionLayers::mask(&[
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENVIRONMENT,
        ]);

        assert_eq!(
            mask,
            CollisionLayers::PLAYER | CollisionLayers::ENEMY | CollisionLayers::ENVIRONMENT
        );
    }

    #[test]
    fn test_default_is_everything() {
        let layers = CollisionLayers::default();
        assert!(layers.contains(CollisionLayers::PICKUP | CollisionLayers::PLAYER));
    }
}
