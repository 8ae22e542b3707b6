//! Collision policies
//!
//! A [`CollisionListener`] decides whether a candidate pair counts as a
//! collision this frame and reacts when it does. Listeners hold no
//! per-frame state, so one instance can be shared by every pair.

use crate::game::EntityStore;
use crate::physics::collision::Collider;
use crate::physics::collision_layers::CollisionLayers;

/// Decide-and-react policy for candidate shape pairs
pub trait CollisionListener: Send + Sync {
    /// Whether `shape1` and `shape2` collide during a step of `delta` seconds
    fn is_collide(&self, shape1: &Collider, shape2: &Collider, delta: f32) -> bool;

    /// React to a confirmed collision
    ///
    /// Only called for a pair whose `is_collide` returned true in the same frame.
    fn on_collide(&self, shape1: &Collider, shape2: &Collider, delta: f32, entities: &mut EntityStore);
}

/// Default policy: geometric intersection, then both owners react
///
/// `shape1`'s owner collides first, then `shape2`'s. If either owner is a
/// passive prop nobody reacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCollisionListener;

impl CollisionListener for SingleCollisionListener {
    fn is_collide(&self, shape1: &Collider, shape2: &Collider, _delta: f32) -> bool {
        shape1.is_intersect(shape2)
    }

    fn on_collide(&self, shape1: &Collider, shape2: &Collider, _delta: f32, entities: &mut EntityStore) {
        let (Some(first), Some(second)) = (shape1.owner.entity(), shape2.owner.entity()) else {
            return;
        };
        entities.dispatch_collision(first, second);
    }
}

/// Wraps another listener and drops pairs whose layers do not accept each other
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerFilterListener<L> {
    inner: L,
}

impl<L: CollisionListener> LayerFilterListener<L> {
    /// Filter pairs before handing them to `inner`
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: CollisionListener> CollisionListener for LayerFilterListener<L> {
    fn is_collide(&self, shape1: &Collider, shape2: &Collider, delta: f32) -> bool {
        CollisionLayers::should_collide(shape1.layer, shape1.mask, shape2.layer, shape2.mask)
            && self.inner.is_collide(shape1, shape2, delta)
    }

    fn on_collide(&self, shape1: &Collider, shape2: &Collider, delta: f32, entities: &mut EntityStore) {
        self.inner.on_collide(shape1, shape2, delta, entities);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::PropKey;
    use crate::foundation::math::Vec3;
    use crate::game::GameEntity;
    use crate::physics::collision::CollisionShape;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter {
        hits: Rc<Cell<u32>>,
    }

    impl GameEntity for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn collide(&mut self, _other: &dyn GameEntity) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    fn counter(store: &mut EntityStore) -> (Rc<Cell<u32>>, crate::foundation::collections::EntityKey) {
        let hits = Rc::new(Cell::new(0));
        let key = store.insert(Box::new(Counter { hits: Rc::clone(&hits) }));
        (hits, key)
    }

    fn sphere(x: f32) -> CollisionShape {
        CollisionShape::sphere(Vec3::new(x, 0.0, 0.0), 1.0)
    }

    #[test]
    fn test_default_listener_is_pure_intersection() {
        let mut store = EntityStore::new();
        let (_, a) = counter(&mut store);
        let (_, b) = counter(&mut store);
        let listener = SingleCollisionListener;

        let near = (Collider::new(sphere(0.0), a), Collider::new(sphere(1.5), b));
        let far = (Collider::new(sphere(0.0), a), Collider::new(sphere(5.0), b));

        assert!(listener.is_collide(&near.0, &near.1, 0.016));
        assert!(listener.is_collide(&near.1, &near.0, 100.0));
        assert!(!listener.is_collide(&far.0, &far.1, 0.016));
    }

    #[test]
    fn test_on_collide_notifies_each_owner_once_in_either_order() {
        let mut store = EntityStore::new();
        let (hits_a, a) = counter(&mut store);
        let (hits_b, b) = counter(&mut store);
        let shape_a = Collider::new(sphere(0.0), a);
        let shape_b = Collider::new(sphere(1.0), b);
        let listener = SingleCollisionListener;

        listener.on_collide(&shape_a, &shape_b, 0.016, &mut store);
        assert_eq!((hits_a.get(), hits_b.get()), (1, 1));

        listener.on_collide(&shape_b, &shape_a, 0.016, &mut store);
        assert_eq!((hits_a.get(), hits_b.get()), (2, 2));
    }

    #[test]
    fn test_passive_owner_silences_reaction() {
        let mut store = EntityStore::new();
        let (hits, a) = counter(&mut store);
        let shape_a = Collider::new(sphere(0.0), a);
        let wall = Collider::new(sphere(0.5), PropKey::default());

        SingleCollisionListener.on_collide(&shape_a, &wall, 0.016, &mut store);
        SingleCollisionListener.on_collide(&wall, &shape_a, 0.016, &mut store);

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_layer_filter() {
        let mut store = EntityStore::new();
        let (_, a) = counter(&mut store);
        let (_, b) = counter(&mut store);
        let listener = LayerFilterListener::new(SingleCollisionListener);

        let player = Collider::new(sphere(0.0), a)
            .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY);
        let pickup = Collider::new(sphere(0.5), b)
            .with_layers(CollisionLayers::PICKUP, CollisionLayers::PLAYER);
        let enemy = Collider::new(sphere(0.5), b)
            .with_layers(CollisionLayers::ENEMY, CollisionLayers::PLAYER);

        assert!(!listener.is_collide(&player, &pickup, 0.016));
        assert!(listener.is_collide(&player, &enemy, 0.016));
    }
}
