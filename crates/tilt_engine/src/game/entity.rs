//! Game entities and the store that owns them
//!
//! Entities react to collisions through [`GameEntity::collide`]. The store
//! hands both participants of a contact to each other in turn, so each side
//! decides its own reaction (damage, score, destruction).

use crate::foundation::collections::{EntityKey, HandleMap};

/// An object that reacts when it collides with another entity
pub trait GameEntity {
    /// Human-readable name used in logs
    fn name(&self) -> &str;

    /// React to touching `other`
    fn collide(&mut self, other: &dyn GameEntity);

    /// Damage dealt to whatever touches this entity
    fn contact_damage(&self) -> u32 {
        0
    }

    /// Points awarded for destroying this entity
    fn score_value(&self) -> u32 {
        0
    }

    /// Whether the entity should be removed at the end of the frame
    fn is_destroyed(&self) -> bool {
        false
    }
}

/// Owning storage for collide-capable entities
#[derive(Default)]
pub struct EntityStore {
    entities: HandleMap<EntityKey, Box<dyn GameEntity>>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its key
    pub fn insert(&mut self, entity: Box<dyn GameEntity>) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity
    pub fn remove(&mut self, key: EntityKey) -> Option<Box<dyn GameEntity>> {
        self.entities.remove(key)
    }

    /// Look up an entity
    pub fn get(&self, key: EntityKey) -> Option<&dyn GameEntity> {
        self.entities.get(key).map(|entity| &**entity)
    }

    /// Check whether the key still refers to a live entity
    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &(dyn GameEntity + 'static))> + '_ {
        self.entities.iter().map(|(key, entity)| (key, &**entity))
    }

    /// Run both halves of a collision: `first` reacts, then `second`
    ///
    /// Returns `false` without calling anything when either key is stale or
    /// both keys name the same entity.
    pub fn dispatch_collision(&mut self, first: EntityKey, second: EntityKey) -> bool {
        if first == second {
            log::trace!("Skipping self-collision for {:?}", first);
            return false;
        }

        let Some([a, b]) = self.entities.get_disjoint_mut([first, second]) else {
            log::warn!("Collision dispatch with stale entity key ({:?}, {:?})", first, second);
            return false;
        };

        a.collide(&**b);
        b.collide(&**a);
        true
    }

    /// Drop every entity that reports itself destroyed, returning their keys
    pub fn remove_destroyed(&mut self) -> Vec<EntityKey> {
        let destroyed: Vec<EntityKey> = self
            .entities
            .iter()
            .filter(|(_, entity)| entity.is_destroyed())
            .map(|(key, _)| key)
            .collect();

        for key in &destroyed {
            if let Some(entity) = self.entities.remove(*key) {
                log::debug!("Removed destroyed entity '{}'", entity.name());
            }
        }
        destroyed
    }
}
