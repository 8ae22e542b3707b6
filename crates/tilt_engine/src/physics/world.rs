//! Storage for entities, passive props and their collision shapes
//!
//! Shapes are registered against an owner, and the owner's capability
//! (entity or passive prop) is fixed at that moment as a [`ShapeOwner`].
//! Nothing downstream has to ask an object what it is.

use thiserror::Error;

use crate::core::config::CollisionConfig;
use crate::foundation::collections::{EntityKey, HandleMap, PropKey, ShapeKey};
use crate::foundation::math::Vec3;
use crate::game::{EntityStore, GameEntity};
use crate::physics::collision::{Collider, CollisionShape, ShapeOwner};

/// Collision bookkeeping errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// A shape key that was never registered or has been detached
    #[error("Unknown collision shape: {0:?}")]
    UnknownShape(ShapeKey),

    /// A shape was attached to an owner that no longer exists
    #[error("Unknown shape owner: {0:?}")]
    UnknownOwner(ShapeOwner),
}

/// Entities, props and colliders for one scene
#[derive(Default)]
pub struct CollisionWorld {
    entities: EntityStore,
    props: HandleMap<PropKey, String>,
    colliders: HandleMap<ShapeKey, Collider>,
    defaults: CollisionConfig,
}

impl CollisionWorld {
    /// Create an empty world using `defaults` for new colliders
    pub fn new(defaults: CollisionConfig) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Add a collide-capable entity
    pub fn spawn_entity(&mut self, entity: Box<dyn GameEntity>) -> EntityKey {
        let name = entity.name().to_string();
        let key = self.entities.insert(entity);
        log::debug!("Spawned entity '{}' as {:?}", name, key);
        key
    }

    /// Add a passive prop that blocks but never reacts
    pub fn spawn_prop(&mut self, name: impl Into<String>) -> PropKey {
        self.props.insert(name.into())
    }

    /// Remove an entity and every shape it owns
    pub fn despawn_entity(&mut self, key: EntityKey) -> Option<Box<dyn GameEntity>> {
        let entity = self.entities.remove(key)?;
        self.colliders.retain(|_, collider| collider.owner != ShapeOwner::Entity(key));
        Some(entity)
    }

    /// Remove a prop and every shape it owns
    pub fn despawn_prop(&mut self, key: PropKey) -> Option<String> {
        let name = self.props.remove(key)?;
        self.colliders.retain(|_, collider| collider.owner != ShapeOwner::Passive(key));
        Some(name)
    }

    /// Register a shape for an owner using the configured default layers
    pub fn attach_shape(
        &mut self,
        owner: impl Into<ShapeOwner>,
        shape: CollisionShape,
    ) -> Result<ShapeKey, CollisionError> {
        let collider = Collider::new(shape, owner)
            .with_layers(self.defaults.default_layer, self.defaults.default_mask);
        self.attach_collider(collider)
    }

    /// Register a fully specified collider
    pub fn attach_collider(&mut self, collider: Collider) -> Result<ShapeKey, CollisionError> {
        let owner_exists = match collider.owner {
            ShapeOwner::Entity(key) => self.entities.contains(key),
            ShapeOwner::Passive(key) => self.props.contains_key(key),
        };
        if !owner_exists {
            return Err(CollisionError::UnknownOwner(collider.owner));
        }
        Ok(self.colliders.insert(collider))
    }

    /// Unregister a shape
    pub fn detach_shape(&mut self, key: ShapeKey) -> Option<Collider> {
        self.colliders.remove(key)
    }

    /// Look up a collider
    pub fn collider(&self, key: ShapeKey) -> Result<&Collider, CollisionError> {
        self.colliders.get(key).ok_or(CollisionError::UnknownShape(key))
    }

    /// Check whether the key still refers to a registered shape
    pub fn contains_shape(&self, key: ShapeKey) -> bool {
        self.colliders.contains_key(key)
    }

    /// Move a shape so its center lands on `center`
    pub fn set_shape_center(&mut self, key: ShapeKey, center: Vec3) -> Result<(), CollisionError> {
        let collider = self.colliders.get_mut(key).ok_or(CollisionError::UnknownShape(key))?;
        collider.shape.set_center(center);
        Ok(())
    }

    /// Shift a shape by `offset`
    pub fn translate_shape(&mut self, key: ShapeKey, offset: Vec3) -> Result<(), CollisionError> {
        let collider = self.colliders.get_mut(key).ok_or(CollisionError::UnknownShape(key))?;
        collider.shape.translate(offset);
        Ok(())
    }

    /// Every unordered pair of registered shapes
    ///
    /// Exhaustive O(n²) enumeration for small scenes; games with many
    /// colliders supply their own candidate pairs.
    pub fn all_pairs(&self) -> Vec<(ShapeKey, ShapeKey)> {
        let keys: Vec<ShapeKey> = self.colliders.keys().collect();
        let mut pairs = Vec::with_capacity(keys.len() * keys.len().saturating_sub(1) / 2);
        for (i, &a) in keys.iter().enumerate() {
            for &b in &keys[i + 1..] {
                pairs.push((a, b));
            }
        }
        pairs
    }

    /// Borrow two colliders alongside the mutable entity store
    pub(crate) fn pair_with_entities(
        &mut self,
        a: ShapeKey,
        b: ShapeKey,
    ) -> Result<(&Collider, &Collider, &mut EntityStore), CollisionError> {
        let first = self.colliders.get(a).ok_or(CollisionError::UnknownShape(a))?;
        let second = self.colliders.get(b).ok_or(CollisionError::UnknownShape(b))?;
        Ok((first, second, &mut self.entities))
    }

    /// Remove entities that report themselves destroyed, with their shapes
    pub fn remove_destroyed(&mut self) -> Vec<EntityKey> {
        let removed = self.entities.remove_destroyed();
        if !removed.is_empty() {
            self.colliders.retain(|_, collider| {
                collider.owner.entity().map_or(true, |key| !removed.contains(&key))
            });
        }
        removed
    }

    /// Collide-capable entities
    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    /// Name of a passive prop
    pub fn prop_name(&self, key: PropKey) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Number of registered shapes
    pub fn shape_count(&self) -> usize {
        self.colliders.len()
    }
}
