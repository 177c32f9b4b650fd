//! Asteroid and bullet spawning.
//!
//! Asteroids appear in one of four bands along the screen edges and head for
//! the centre.  Their speed follows a tunable difficulty policy:
//!
//! ```text
//! velocity = to_centre / (|to_centre| / approach_distance_divisor + score)
//! ```
//!
//! With a score of zero every asteroid approaches at `approach_distance_divisor`
//! pixels per second regardless of where it starts; each point scored slows
//! new arrivals down, far ones least.
//!
//! Both spawners are silent no-ops when their pool is full.

use crate::config::GameConfig;
use crate::player::Player;
use crate::pool::ShapePool;
use crate::shape::{Shape, ShapeKind};
use bevy::prelude::*;
use rand::Rng;

/// Screen edge an asteroid enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Uniform point inside this edge's band.
    pub fn random_point(self, rng: &mut impl Rng, config: &GameConfig) -> Vec2 {
        let (w, h, band) = (config.screen_width, config.screen_height, config.edge_band);
        match self {
            Edge::Left => Vec2::new(rng.gen_range(0.0..=band), rng.gen_range(0.0..=h)),
            Edge::Right => Vec2::new(rng.gen_range(w - band..=w), rng.gen_range(0.0..=h)),
            Edge::Top => Vec2::new(rng.gen_range(0.0..=w), rng.gen_range(0.0..=band)),
            Edge::Bottom => Vec2::new(rng.gen_range(0.0..=w), rng.gen_range(h - band..=h)),
        }
    }
}

/// Pick a coordinate in `[margin, extent - margin]` that is within `edge_band`
/// of either end, keeping clear of the centre reserved for the ship.
fn edge_biased_coordinate(rng: &mut impl Rng, extent: f32, config: &GameConfig) -> f32 {
    loop {
        let v = rng.gen_range(config.spawn_margin..=extent - config.spawn_margin);
        if v <= config.edge_band || v >= extent - config.edge_band {
            return v;
        }
    }
}

/// Velocity of an asteroid at `from` under the approach-speed policy.
pub fn approach_velocity(from: Vec2, config: &GameConfig, score: u32) -> Vec2 {
    let to_centre = config.center() - from;
    let divisor = to_centre.length() / config.approach_distance_divisor + score as f32;
    if divisor > 0.0 {
        to_centre / divisor
    } else {
        Vec2::ZERO
    }
}

/// Generate one asteroid on a random edge band, aimed at the centre.
///
/// Returns the pool slot, or `None` if the pool is full.
pub fn spawn_asteroid(
    pool: &mut ShapePool,
    rng: &mut impl Rng,
    config: &GameConfig,
    score: u32,
) -> Option<usize> {
    if pool.is_full() {
        return None;
    }

    let origin = Vec2::new(
        edge_biased_coordinate(rng, config.screen_width, config),
        edge_biased_coordinate(rng, config.screen_height, config),
    );
    let vertex_count = rng.gen_range(config.asteroid_min_vertices..=config.asteroid_max_vertices);
    let mut asteroid = Shape::random(
        rng,
        origin,
        vertex_count,
        config.asteroid_min_radius,
        config.asteroid_max_radius,
        ShapeKind::Asteroid,
    );

    let entry = Edge::random(rng).random_point(rng, config);
    asteroid.translate_to(entry);
    asteroid.velocity = approach_velocity(asteroid.centroid(), config, score);

    pool.try_insert(asteroid)
}

/// Fire one bullet from the ship's nose along its facing.
///
/// Returns the pool slot, or `None` if the pool is full.  Ammo and recoil are
/// the caller's business.
pub fn spawn_bullet(
    pool: &mut ShapePool,
    rng: &mut impl Rng,
    player: &Player,
    config: &GameConfig,
) -> Option<usize> {
    if pool.is_full() {
        return None;
    }

    let bullet = Shape::random(
        rng,
        player.nose(config),
        config.bullet_vertices,
        config.bullet_min_radius,
        config.bullet_max_radius,
        ShapeKind::Bullet,
    )
    .with_velocity(player.facing() * config.bullet_speed);

    pool.try_insert(bullet)
}
