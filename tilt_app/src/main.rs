//! Tilt demo application
//!
//! Drives the engine headless: a simulated orientation sensor steers a ship
//! through a field of asteroids bounded by walls. Pass a `.toml` or `.ron`
//! engine config path as the first argument to override the defaults.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tilt_engine::core::config::ConfigError;
use tilt_engine::foundation::logging;
use tilt_engine::foundation::math::vec3_from_2d;
use tilt_engine::prelude::*;

const FRAME_COUNT: u64 = 600;
const FRAME_DELTA: f32 = 1.0 / 60.0;
const RECENTER_FRAME: u64 = 30;
const SHIP_SPEED: f32 = 4.0;
const SENSOR_NOISE: f32 = 0.15;
const GRAVITY: f32 = 9.81;
const ASTEROID_COUNT: usize = 12;

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Collision error: {0}")]
    Collision(#[from] tilt_engine::physics::CollisionError),
}

struct Ship {
    hull: u32,
    score: u32,
}

impl GameEntity for Ship {
    fn name(&self) -> &str {
        "ship"
    }

    fn collide(&mut self, other: &dyn GameEntity) {
        self.hull = self.hull.saturating_sub(other.contact_damage());
        self.score += other.score_value();
        log::info!("Ship hit {} (hull {}, score {})", other.name(), self.hull, self.score);
    }

    fn is_destroyed(&self) -> bool {
        self.hull == 0
    }
}

struct Asteroid {
    name: String,
    destroyed: bool,
}

impl GameEntity for Asteroid {
    fn name(&self) -> &str {
        &self.name
    }

    fn collide(&mut self, other: &dyn GameEntity) {
        log::debug!("{} shattered by {}", self.name, other.name());
        self.destroyed = true;
    }

    fn contact_damage(&self) -> u32 {
        1
    }

    fn score_value(&self) -> u32 {
        50
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

struct TiltDemoApp {
    engine: Engine,
    attitude: Attitude,
    ship: EntityKey,
    ship_shape: ShapeKey,
    ship_position: Vec3,
    rng: StdRng,
    collisions: usize,
    destroyed: usize,
}

impl TiltDemoApp {
    fn new(config: EngineConfig) -> Result<Self, DemoError> {
        log::info!("Creating tilt demo application...");
        let mut engine = Engine::new(config)?;
        let mut rng = StdRng::seed_from_u64(7);

        let world = engine.world_mut();
        let ship = world.spawn_entity(Box::new(Ship { hull: 5, score: 0 }));
        let ship_shape = world.attach_collider(
            Collider::new(CollisionShape::sphere(Vec3::zeros(), 0.5), ship)
                .with_layers(
                    CollisionLayers::PLAYER,
                    CollisionLayers::mask(&[CollisionLayers::ENEMY, CollisionLayers::ENVIRONMENT]),
                ),
        )?;

        for i in 0..ASTEROID_COUNT {
            let asteroid = world.spawn_entity(Box::new(Asteroid {
                name: format!("asteroid-{i}"),
                destroyed: false,
            }));
            let center = vec3_from_2d(Vec2::new(rng.gen_range(3.0..25.0), rng.gen_range(-8.0..8.0)));
            world.attach_collider(
                Collider::new(CollisionShape::sphere(center, rng.gen_range(0.4..1.2)), asteroid)
                    .with_layers(CollisionLayers::ENEMY, CollisionLayers::PLAYER),
            )?;
        }

        for (name, y) in [("north-wall", 10.0), ("south-wall", -10.0)] {
            let wall = world.spawn_prop(name);
            world.attach_collider(
                Collider::new(
                    CollisionShape::cuboid(Vec3::new(15.0, y, 0.0), Vec3::new(20.0, 0.5, 0.0)),
                    wall,
                )
                .with_layers(CollisionLayers::ENVIRONMENT, CollisionLayers::PLAYER),
            )?;
        }

        log::info!("Scene ready with {} shapes", world.shape_count());

        Ok(Self {
            engine,
            attitude: Attitude::new().with_pitch_limit(0.5),
            ship,
            ship_shape,
            ship_position: Vec3::zeros(),
            rng,
            collisions: 0,
            destroyed: 0,
        })
    }

    /// Simulated gravity reading: the player slowly weaves left and right
    fn sample_sensor(&mut self, frame: u64) -> SensorSample {
        #[allow(clippy::cast_precision_loss)]
        let t = frame as f32 * FRAME_DELTA;
        let tilt = if frame < RECENTER_FRAME { 0.0 } else { 1.5 * (t * 0.8).sin() };
        let mut noise = || self.rng.gen_range(-SENSOR_NOISE..SENSOR_NOISE);

        SensorSample::new(0.2 + noise(), tilt + noise(), GRAVITY + noise())
    }

    fn run(&mut self) -> Result<(), DemoError> {
        log::info!("Starting tilt demo...");

        for frame in 0..FRAME_COUNT {
            let sample = self.sample_sensor(frame);
            self.engine.on_sensor(&sample, Some(&mut self.attitude));

            if frame == RECENTER_FRAME {
                self.engine.recenter();
            }

            let heading = Vec3::new(self.attitude.yaw.cos(), self.attitude.yaw.sin(), 0.0);
            self.ship_position += heading * SHIP_SPEED * FRAME_DELTA;
            if self.engine.world().entities().contains(self.ship) {
                self.engine.world_mut().set_shape_center(self.ship_shape, self.ship_position)?;
            }

            let report = self.engine.tick(FRAME_DELTA)?;
            self.collisions += report.stats.collisions;
            self.destroyed += report.destroyed.len();

            if report.destroyed.contains(&self.ship) {
                log::warn!("Ship destroyed on frame {}", report.frame);
                break;
            }

            if frame % 120 == 0 {
                log::debug!(
                    "Frame {}: ship at ({:.2}, {:.2}), yaw {:.3}, roll {:.3}",
                    frame,
                    self.ship_position.x,
                    self.ship_position.y,
                    self.attitude.yaw,
                    self.attitude.roll
                );
            }
        }

        log::info!(
            "Tilt demo completed after {} frames: {} collisions, {} entities destroyed",
            self.engine.frame(),
            self.collisions,
            self.destroyed
        );

        let entities = self.engine.world().entities();
        match entities.get(self.ship) {
            Some(ship) => log::info!("The {} made it through", ship.name()),
            None => log::info!("The ship was lost"),
        }
        let survivors: Vec<&str> = entities.iter().map(|(_, entity)| entity.name()).collect();
        log::debug!("Surviving entities: {}", survivors.join(", "));
        Ok(())
    }
}

fn load_config(path: Option<String>) -> Result<EngineConfig, DemoError> {
    match path {
        Some(path) => Ok(EngineConfig::load(&path)?),
        None => {
            log::info!("Using default engine configuration");
            Ok(EngineConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");
    log::info!("Starting Tilt Demo");

    let config = load_config(std::env::args().nth(1))?;

    let mut app = TiltDemoApp::new(config)?;
    if let Err(e) = app.run() {
        log::error!("Application error: {:?}", e);
        return Err(e.into());
    }

    log::info!("Tilt demo finished successfully");
    Ok(())
}
