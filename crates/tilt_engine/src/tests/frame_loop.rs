//! Collision dispatch through a full engine tick

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::core::config::EngineConfig;
use crate::foundation::math::Vec3;
use crate::game::GameEntity;
use crate::physics::{
    Collider, CollisionDispatcher, CollisionLayers, CollisionShape, LayerFilterListener,
    SingleCollisionListener,
};
use crate::{Engine, EngineError};

type Journal = Rc<RefCell<Vec<String>>>;

struct Ship {
    hull: u32,
    score: u32,
    journal: Journal,
}

impl GameEntity for Ship {
    fn name(&self) -> &str {
        "ship"
    }

    fn collide(&mut self, other: &dyn GameEntity) {
        self.hull = self.hull.saturating_sub(other.contact_damage());
        self.score += other.score_value();
        self.journal.borrow_mut().push(format!("ship hit {}", other.name()));
    }

    fn is_destroyed(&self) -> bool {
        self.hull == 0
    }
}

struct Asteroid {
    destroyed: bool,
    journal: Journal,
}

impl GameEntity for Asteroid {
    fn name(&self) -> &str {
        "asteroid"
    }

    fn collide(&mut self, other: &dyn GameEntity) {
        self.destroyed = true;
        self.journal.borrow_mut().push(format!("asteroid hit {}", other.name()));
    }

    fn contact_damage(&self) -> u32 {
        1
    }

    fn score_value(&self) -> u32 {
        100
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_dispatches_and_removes_destroyed() {
        let journal: Journal = Rc::default();
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let world = engine.world_mut();

        let ship = world.spawn_entity(Box::new(Ship { hull: 3, score: 0, journal: Rc::clone(&journal) }));
        let rock = world.spawn_entity(Box::new(Asteroid { destroyed: false, journal: Rc::clone(&journal) }));
        let wall = world.spawn_prop("wall");

        world.attach_shape(ship, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();
        world.attach_shape(rock, CollisionShape::sphere(Vec3::new(1.5, 0.0, 0.0), 1.0)).unwrap();
        world.attach_shape(wall, CollisionShape::cuboid(Vec3::new(0.0, -1.5, 0.0), Vec3::new(1.0, 0.5, 0.0))).unwrap();

        let report = engine.tick(1.0 / 60.0).unwrap();

        // ship/rock overlap, ship touches the wall; the wall never reacts
        assert_eq!(report.stats.candidates, 3);
        assert_eq!(report.stats.collisions, 2);
        assert_eq!(report.destroyed, vec![rock]);
        assert_eq!(journal.borrow().len(), 2);
        assert!(journal.borrow().contains(&"ship hit asteroid".to_string()));
        assert!(journal.borrow().contains(&"asteroid hit ship".to_string()));

        assert!(engine.world().entities().contains(ship));
        assert_eq!(engine.world().shape_count(), 2);

        let second = engine.tick(1.0 / 60.0).unwrap();
        assert_eq!(second.frame, 2);
        assert_eq!(second.stats.collisions, 1);
        assert_eq!(journal.borrow().len(), 2);
    }

    #[test]
    fn test_layer_filtered_engine() {
        let journal: Journal = Rc::default();
        let dispatcher = CollisionDispatcher::new(Arc::new(LayerFilterListener::new(SingleCollisionListener)));
        let mut engine = Engine::with_dispatcher(EngineConfig::default(), dispatcher).unwrap();
        let world = engine.world_mut();

        let ship = world.spawn_entity(Box::new(Ship { hull: 3, score: 0, journal: Rc::clone(&journal) }));
        let rock = world.spawn_entity(Box::new(Asteroid { destroyed: false, journal: Rc::clone(&journal) }));

        world
            .attach_collider(
                Collider::new(CollisionShape::sphere(Vec3::zeros(), 1.0), ship)
                    .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY),
            )
            .unwrap();
        world
            .attach_collider(
                Collider::new(CollisionShape::sphere(Vec3::zeros(), 1.0), rock)
                    .with_layers(CollisionLayers::DEBRIS, CollisionLayers::PLAYER),
            )
            .unwrap();

        let report = engine.tick(1.0 / 60.0).unwrap();

        assert_eq!(report.stats.collisions, 0);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_ship_destroyed_after_enough_hits() {
        let journal: Journal = Rc::default();
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let world = engine.world_mut();

        let ship = world.spawn_entity(Box::new(Ship { hull: 1, score: 0, journal: Rc::clone(&journal) }));
        let rock = world.spawn_entity(Box::new(Asteroid { destroyed: false, journal: Rc::clone(&journal) }));
        world.attach_shape(ship, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();
        world.attach_shape(rock, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();

        let report = engine.tick(0.016).unwrap();

        assert_eq!(report.destroyed.len(), 2);
        assert!(engine.world().entities().is_empty());
        assert_eq!(engine.world().shape_count(), 0);
    }

    #[test]
    fn test_stale_pair_leaves_frame_untouched() {
        let journal: Journal = Rc::default();
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let world = engine.world_mut();

        let ship = world.spawn_entity(Box::new(Ship { hull: 3, score: 0, journal: Rc::clone(&journal) }));
        let rock = world.spawn_entity(Box::new(Asteroid { destroyed: false, journal: Rc::clone(&journal) }));
        let ship_shape = world.attach_shape(ship, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();
        let rock_shape = world.attach_shape(rock, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();
        let spare = world.attach_shape(rock, CollisionShape::sphere(Vec3::zeros(), 1.0)).unwrap();
        world.detach_shape(spare);

        let result = engine.tick_with_pairs(0.016, &[(ship_shape, rock_shape), (ship_shape, spare)]);

        assert!(matches!(result, Err(EngineError::Collision(_))));
        assert!(journal.borrow().is_empty());
        assert_eq!(engine.frame(), 0);
        assert!(engine.world().entities().contains(rock));
    }
}
