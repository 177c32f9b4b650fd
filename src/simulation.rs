//! The game world and its fixed-rate step.
//!
//! All mutable game state lives in one [`GameWorld`] resource.  Systems call
//! [`GameWorld::step`] once per `FixedUpdate` tick; rendering only reads the
//! resource.  The step itself is plain Rust with no ECS access, so unit tests
//! drive it directly with a seeded world and a hand-built [`ShipIntent`].
//!
//! ## Step order
//!
//! 1. Restart, if requested (allowed in any state).
//! 2. Stop here while the game is over.
//! 3. Steering and firing.
//! 4. Frame counter, ammo regeneration, periodic asteroid spawn.
//! 5. Ship integration against the walls.
//! 6. Asteroid pass: move, cull, test against the ship's hull.
//! 7. Bullet pass: move, cull, test against asteroids.  The first hit ends
//!    the pass, so at most one asteroid is destroyed per frame.
//!
//! Removal during a pass swaps the last shape into the freed slot and re-visits
//! that slot, so every live shape is processed exactly once per frame.

use crate::config::{load_game_config, GameConfig};
use crate::geometry::is_off_screen;
use crate::player::{keyboard_to_intent_system, Player, ShipIntent};
use crate::pool::ShapePool;
use crate::spawner::{spawn_asteroid, spawn_bullet};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // A config inserted before the plugin (tests, embedding apps) wins.
        let config = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let world = GameWorld::new(&config);

        app.insert_resource(config)
            .init_resource::<ShipIntent>()
            .insert_resource(world)
            .add_systems(Startup, load_game_config)
            .add_systems(
                Update,
                keyboard_to_intent_system.run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(FixedUpdate, advance_world_system);
    }
}

/// What happened during one [`GameWorld::step`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepEvents {
    pub restarted: bool,
    pub bullet_fired: bool,
    pub asteroid_spawned: bool,
    /// The ship's move was rejected at a wall.
    pub bounced: bool,
    pub asteroids_culled: usize,
    pub bullets_culled: usize,
    pub asteroid_destroyed: bool,
    pub game_over_raised: bool,
}

/// Complete game state.
#[derive(Resource)]
pub struct GameWorld {
    pub player: Player,
    pub asteroids: ShapePool,
    pub bullets: ShapePool,
    pub score: u32,
    /// Highest score reached since the process started.
    pub best_score: u32,
    pub game_over: bool,
    /// Steps taken while flying.  Survives restarts.
    pub frame_count: u64,
    rng: StdRng,
}

impl GameWorld {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic world for tests and replays.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        Self {
            player: Player::new(config),
            asteroids: ShapePool::new(config.max_asteroids),
            bullets: ShapePool::new(config.max_bullets),
            score: 0,
            best_score: 0,
            game_over: false,
            frame_count: 0,
            rng,
        }
    }

    /// Empty both pools, zero the score and put a fresh ship in the centre.
    ///
    /// Pools are rebuilt so capacity follows the current config.
    pub fn restart(&mut self, config: &GameConfig) {
        self.player = Player::new(config);
        self.asteroids = ShapePool::new(config.max_asteroids);
        self.bullets = ShapePool::new(config.max_bullets);
        self.score = 0;
        self.game_over = false;
    }

    /// Advance the world by one frame.
    pub fn step(&mut self, intent: &ShipIntent, config: &GameConfig) -> StepEvents {
        let mut events = StepEvents::default();

        if intent.restart {
            self.restart(config);
            events.restarted = true;
        }
        if self.game_over {
            return events;
        }

        self.player.steer(intent, config);
        if intent.fire {
            events.bullet_fired = self.fire(config);
        }

        self.frame_count += 1;
        if self.frame_count % config.ammo_regen_interval_frames == 0 {
            self.player.regenerate_ammo(config.max_ammo);
        }
        if self.frame_count % config.asteroid_spawn_interval_frames == 0 {
            events.asteroid_spawned =
                spawn_asteroid(&mut self.asteroids, &mut self.rng, config, self.score).is_some();
        }

        events.bounced = self.player.integrate(config);

        self.update_asteroids(config, &mut events);
        self.update_bullets(config, &mut events);
        events
    }

    /// Spawn a bullet if there is ammo and room.  Recoil and ammo only apply
    /// to bullets that were actually spawned.
    fn fire(&mut self, config: &GameConfig) -> bool {
        if self.player.ammo == 0 {
            return false;
        }
        if spawn_bullet(&mut self.bullets, &mut self.rng, &self.player, config).is_none() {
            return false;
        }
        self.player.recoil(config.recoil);
        self.player.take_round()
    }

    fn update_asteroids(&mut self, config: &GameConfig, events: &mut StepEvents) {
        let dt = config.dt();
        let size = config.screen_size();
        let hull = self.player.hull(config);

        let mut i = 0;
        while i < self.asteroids.len() {
            let asteroid = &mut self.asteroids[i];
            asteroid.integrate(dt);
            if is_off_screen(asteroid.centroid(), size) {
                self.asteroids.destroy(i);
                events.asteroids_culled += 1;
                continue;
            }
            if !self.game_over && asteroid.contains_any(&hull) {
                self.game_over = true;
                events.game_over_raised = true;
            }
            i += 1;
        }
    }

    fn update_bullets(&mut self, config: &GameConfig, events: &mut StepEvents) {
        let dt = config.dt();
        let size = config.screen_size();

        let mut i = 0;
        while i < self.bullets.len() {
            let bullet = &mut self.bullets[i];
            bullet.integrate(dt);
            if is_off_screen(bullet.centroid(), size) {
                self.bullets.destroy(i);
                events.bullets_culled += 1;
                continue;
            }

            let target = self
                .asteroids
                .iter()
                .position(|asteroid| asteroid.contains_any(bullet.vertices()));
            if let Some(j) = target {
                self.bullets.destroy(i);
                self.asteroids.destroy(j);
                self.score += 1;
                self.best_score = self.best_score.max(self.score);
                events.asteroid_destroyed = true;
                break;
            }
            i += 1;
        }
    }
}

/// Step the world once per fixed tick and consume the latched restart.
pub fn advance_world_system(
    mut world: ResMut<GameWorld>,
    mut intent: ResMut<ShipIntent>,
    config: Res<GameConfig>,
) {
    let events = world.step(&intent, &config);
    intent.restart = false;

    if events.restarted {
        info!("Restarted (best score this session: {})", world.best_score);
    }
    if events.asteroid_spawned {
        debug!("Asteroid spawned ({} live)", world.asteroids.len());
    }
    if events.asteroid_destroyed {
        debug!("Asteroid destroyed, score {}", world.score);
    }
    if events.game_over_raised {
        info!("Game over with a score of {}", world.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeKind};

    fn quiet_config() -> GameConfig {
        // No periodic spawns during short tests.
        GameConfig {
            asteroid_spawn_interval_frames: 1_000_000,
            ..GameConfig::default()
        }
    }

    fn asteroid_at(center: Vec2, radius: f32) -> Shape {
        Shape::regular(center, 8, radius, ShapeKind::Asteroid).expect("8 vertices")
    }

    fn idle() -> ShipIntent {
        ShipIntent::default()
    }

    fn assert_centroids_consistent(pool: &ShapePool) {
        for shape in pool.iter() {
            let mean = shape.vertices().iter().copied().sum::<Vec2>() / shape.vertex_count() as f32;
            assert!(
                (mean - shape.centroid()).length() < 1e-2,
                "cached centroid {:?} drifted from vertex mean {mean:?}",
                shape.centroid()
            );
        }
    }

    // ── frame counter ─────────────────────────────────────────────────────────

    #[test]
    fn ammo_regenerates_on_the_interval() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 1);
        world.player.ammo = 0;

        for _ in 0..config.ammo_regen_interval_frames - 1 {
            world.step(&idle(), &config);
        }
        assert_eq!(world.player.ammo, 0);
        world.step(&idle(), &config);
        assert_eq!(world.player.ammo, 1);
    }

    #[test]
    fn asteroids_spawn_once_per_interval_and_keep_their_centroids() {
        let config = GameConfig::default();
        let mut world = GameWorld::with_seed(&config, 9);

        let mut spawned = 0;
        for _ in 0..config.asteroid_spawn_interval_frames * 3 {
            if world.step(&idle(), &config).asteroid_spawned {
                spawned += 1;
            }
            assert_centroids_consistent(&world.asteroids);
        }
        assert_eq!(spawned, 3);
    }

    // ── firing ────────────────────────────────────────────────────────────────

    #[test]
    fn firing_spends_ammo_and_recoils() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 2);
        let fire = ShipIntent {
            fire: true,
            ..Default::default()
        };

        let events = world.step(&fire, &config);
        assert!(events.bullet_fired);
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.player.ammo, config.max_ammo - 1);
        assert!(world.player.acceleration.y > 0.0, "recoil pushes the ship backwards");
    }

    #[test]
    fn empty_magazine_or_full_pool_fires_nothing() {
        let config = GameConfig {
            max_bullets: 1,
            ..quiet_config()
        };
        let mut world = GameWorld::with_seed(&config, 3);
        let fire = ShipIntent {
            fire: true,
            ..Default::default()
        };

        assert!(world.step(&fire, &config).bullet_fired);
        let ammo = world.player.ammo;
        assert!(!world.step(&fire, &config).bullet_fired, "bullet pool is full");
        assert_eq!(world.player.ammo, ammo, "no ammo spent on a dropped shot");

        world.bullets.clear();
        world.player.ammo = 0;
        assert!(!world.step(&fire, &config).bullet_fired, "magazine is empty");
        assert!(world.bullets.is_empty());
    }

    // ── asteroid pass ─────────────────────────────────────────────────────────

    #[test]
    fn asteroid_over_the_hull_ends_the_game() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 4);
        let _ = world.asteroids.try_insert(asteroid_at(world.player.nose(&config), 30.0));

        let events = world.step(&idle(), &config);
        assert!(events.game_over_raised);
        assert!(world.game_over);

        let frozen = world.player.clone();
        let after = world.step(
            &ShipIntent {
                thrust: true,
                ..Default::default()
            },
            &config,
        );
        assert_eq!(after, StepEvents::default(), "nothing happens after game over");
        assert_eq!(world.player, frozen);
    }

    #[test]
    fn asteroids_leaving_the_screen_are_culled_without_skipping_the_swapped_in_one() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 5);
        let outgoing = asteroid_at(Vec2::new(1.0, 300.0), 20.0)
            .with_velocity(Vec2::new(-600.0, 0.0));
        let staying = asteroid_at(Vec2::new(300.0, 300.0), 20.0)
            .with_velocity(Vec2::new(60.0, 0.0));
        let _ = world.asteroids.try_insert(outgoing);
        let _ = world.asteroids.try_insert(staying);

        let events = world.step(&idle(), &config);
        assert_eq!(events.asteroids_culled, 1);
        assert_eq!(world.asteroids.len(), 1);
        assert!(
            (world.asteroids[0].centroid() - Vec2::new(301.0, 300.0)).length() < 1e-3,
            "the swapped-in asteroid still moved exactly once"
        );
    }

    #[test]
    fn game_over_mid_pass_still_moves_culls_and_scores_that_frame() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 12);
        let over_hull = asteroid_at(world.player.nose(&config), 30.0);
        let outgoing = asteroid_at(Vec2::new(1.0, 300.0), 20.0)
            .with_velocity(Vec2::new(-600.0, 0.0));
        let target = asteroid_at(Vec2::new(300.0, 200.0), 40.0);
        let drifting = asteroid_at(Vec2::new(1500.0, 200.0), 20.0)
            .with_velocity(Vec2::new(60.0, 0.0));
        for asteroid in [over_hull, outgoing, target, drifting] {
            let _ = world.asteroids.try_insert(asteroid);
        }
        let bullet = Shape::regular(Vec2::new(300.0, 200.0), 4, 3.0, ShapeKind::Bullet)
            .expect("4 vertices");
        let _ = world.bullets.try_insert(bullet);

        let events = world.step(&idle(), &config);

        assert!(events.game_over_raised, "first asteroid ends the game");
        assert_eq!(events.asteroids_culled, 1, "later asteroids are still culled");
        assert!(events.asteroid_destroyed, "the bullet pass still runs");
        assert_eq!(world.score, 1);
        assert!(world.bullets.is_empty());
        assert_eq!(world.asteroids.len(), 2);
        let drifted = world
            .asteroids
            .iter()
            .find(|a| a.centroid().x > 1000.0)
            .expect("drifting asteroid survives");
        assert!(
            (drifted.centroid() - Vec2::new(1501.0, 200.0)).length() < 1e-3,
            "asteroids after the hit still move, got {:?}",
            drifted.centroid()
        );
    }

    // ── bullet pass ───────────────────────────────────────────────────────────

    #[test]
    fn bullets_leaving_the_screen_are_culled_without_skipping_the_swapped_in_one() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 11);
        let bullet = |center: Vec2, velocity: Vec2| {
            Shape::regular(center, 4, 3.0, ShapeKind::Bullet)
                .expect("4 vertices")
                .with_velocity(velocity)
        };
        let _ = world
            .bullets
            .try_insert(bullet(Vec2::new(1.0, 300.0), Vec2::new(-600.0, 0.0)));
        let _ = world
            .bullets
            .try_insert(bullet(Vec2::new(300.0, 300.0), Vec2::new(60.0, 0.0)));

        let events = world.step(&idle(), &config);
        assert_eq!(events.bullets_culled, 1);
        assert_eq!(world.bullets.len(), 1);
        assert!(
            (world.bullets[0].centroid() - Vec2::new(301.0, 300.0)).length() < 1e-3,
            "the swapped-in bullet still moved exactly once, got {:?}",
            world.bullets[0].centroid()
        );
    }

    #[test]
    fn bullet_fired_at_an_asteroid_destroys_it_exactly_once() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 6);
        let target = world.player.position + Vec2::new(0.0, -300.0);
        let _ = world.asteroids.try_insert(asteroid_at(target, 40.0));

        let fire = ShipIntent {
            fire: true,
            ..Default::default()
        };
        assert!(world.step(&fire, &config).bullet_fired);

        let mut hits = 0;
        for _ in 0..60 {
            let events = world.step(&idle(), &config);
            if events.asteroid_destroyed {
                hits += 1;
            }
        }
        assert_eq!(hits, 1);
        assert!(world.asteroids.is_empty());
        assert!(world.bullets.is_empty());
        assert_eq!(world.score, 1);
        assert_eq!(world.best_score, 1);
    }

    #[test]
    fn only_one_hit_is_resolved_per_frame() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 7);
        for x in [300.0, 700.0, 1100.0] {
            let center = Vec2::new(x, 200.0);
            let _ = world.asteroids.try_insert(asteroid_at(center, 40.0));
            let bullet = Shape::regular(center, 4, 3.0, ShapeKind::Bullet).expect("4 vertices");
            let _ = world.bullets.try_insert(bullet);
        }

        let events = world.step(&idle(), &config);
        assert!(events.asteroid_destroyed);
        assert_eq!(world.score, 1);
        assert_eq!(world.asteroids.len(), 2);
        assert_eq!(world.bullets.len(), 2);

        world.step(&idle(), &config);
        world.step(&idle(), &config);
        assert_eq!(world.score, 3);
        assert!(world.asteroids.is_empty() && world.bullets.is_empty());
    }

    // ── restart ───────────────────────────────────────────────────────────────

    #[test]
    fn restart_clears_everything_but_the_best_score_and_frame_counter() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 8);
        for _ in 0..3 {
            let _ = world.asteroids.try_insert(asteroid_at(Vec2::new(200.0, 200.0), 20.0));
        }
        let _ = world.bullets.try_insert(
            Shape::regular(Vec2::new(900.0, 900.0), 4, 3.0, ShapeKind::Bullet).expect("4 vertices"),
        );
        world.score = 12;
        world.best_score = 12;
        world.game_over = true;
        world.frame_count = 77;
        world.player.angle = 90.0;
        world.player.ammo = 3;

        let restart = ShipIntent {
            restart: true,
            ..Default::default()
        };
        let events = world.step(&restart, &config);

        assert!(events.restarted);
        assert!(!world.game_over);
        assert!(world.asteroids.is_empty() && world.bullets.is_empty());
        assert_eq!(world.score, 0);
        assert_eq!(world.best_score, 12);
        assert_eq!(world.player.position, config.center());
        assert_eq!(world.player.angle, 0.0);
        assert_eq!(world.player.ammo, config.max_ammo);
        assert_eq!(world.frame_count, 78, "counter keeps running across restarts");
    }

    // ── walls ─────────────────────────────────────────────────────────────────

    #[test]
    fn thrusting_into_a_wall_bounces_and_stays_on_screen() {
        let config = quiet_config();
        let mut world = GameWorld::with_seed(&config, 10);
        world.player.angle = 90.0;
        let thrust = ShipIntent {
            thrust: true,
            ..Default::default()
        };

        let mut bounced = false;
        for _ in 0..600 {
            bounced |= world.step(&thrust, &config).bounced;
            let p = world.player.position;
            assert!(p.x > 0.0 && p.x < config.screen_width, "left the field at {p:?}");
            assert!(p.y > 0.0 && p.y < config.screen_height, "left the field at {p:?}");
        }
        assert!(bounced);
    }
}
