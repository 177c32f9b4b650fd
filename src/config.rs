//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.turn_speed`, `config.max_bullets`, etc.  Plain code (the
//! simulation core) takes `&GameConfig` instead.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{
    ensure_below, ensure_finite, ensure_non_negative, ensure_positive, ensure_range, GameError,
    GameResult,
};
use crate::simulation::GameWorld;
use bevy::prelude::*;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// Location of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset in `assets/game.toml`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Play Field ───────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub target_fps: f64,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_length: f32,
    pub ship_base_width: f32,
    pub thrust: f32,
    pub turn_speed: f32,
    pub recoil: f32,
    pub integration_dt_squared: f32,
    pub bounce_factor: f32,
    pub accel_epsilon: f32,

    // ── Pools and Ammo ───────────────────────────────────────────────────────
    pub max_asteroids: usize,
    pub max_bullets: usize,
    pub max_ammo: u32,
    pub ammo_regen_interval_frames: u64,

    // ── Asteroid Spawning ────────────────────────────────────────────────────
    pub asteroid_spawn_interval_frames: u64,
    pub asteroid_min_vertices: usize,
    pub asteroid_max_vertices: usize,
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub spawn_margin: f32,
    pub edge_band: f32,
    pub approach_distance_divisor: f32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_vertices: usize,
    pub bullet_min_radius: f32,
    pub bullet_max_radius: f32,
    pub bullet_speed: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Play Field
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            // Ship
            ship_length: SHIP_LENGTH,
            ship_base_width: SHIP_BASE_WIDTH,
            thrust: THRUST,
            turn_speed: TURN_SPEED,
            recoil: RECOIL,
            integration_dt_squared: INTEGRATION_DT_SQUARED,
            bounce_factor: BOUNCE_FACTOR,
            accel_epsilon: ACCEL_EPSILON,
            // Pools and Ammo
            max_asteroids: MAX_ASTEROIDS,
            max_bullets: MAX_BULLETS,
            max_ammo: MAX_AMMO,
            ammo_regen_interval_frames: AMMO_REGEN_INTERVAL_FRAMES,
            // Asteroid Spawning
            asteroid_spawn_interval_frames: ASTEROID_SPAWN_INTERVAL_FRAMES,
            asteroid_min_vertices: ASTEROID_MIN_VERTICES,
            asteroid_max_vertices: ASTEROID_MAX_VERTICES,
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            edge_band: EDGE_BAND,
            approach_distance_divisor: APPROACH_DISTANCE_DIVISOR,
            // Bullets
            bullet_vertices: BULLET_VERTICES,
            bullet_min_radius: BULLET_MIN_RADIUS,
            bullet_max_radius: BULLET_MAX_RADIUS,
            bullet_speed: BULLET_SPEED,
            // HUD
            font_size: FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse `path`.  A missing file is `Ok(None)`, not an error.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Option<Self>> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::ConfigRead {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Reject values the simulation cannot run with.
    ///
    /// Inverted or empty random ranges would panic inside `gen_range`, and
    /// edge bands that are NaN or wider than half the screen would make spawn
    /// pre-placement loop forever.  Every float must be finite.
    pub fn validate(&self) -> GameResult<()> {
        ensure_positive("screen_width", self.screen_width as f64)?;
        ensure_positive("screen_height", self.screen_height as f64)?;
        ensure_positive("target_fps", self.target_fps)?;
        ensure_positive(
            "ammo_regen_interval_frames",
            self.ammo_regen_interval_frames as f64,
        )?;
        ensure_positive(
            "asteroid_spawn_interval_frames",
            self.asteroid_spawn_interval_frames as f64,
        )?;
        ensure_positive(
            "approach_distance_divisor",
            self.approach_distance_divisor as f64,
        )?;

        for (got, required) in [
            (self.asteroid_min_vertices, 3),
            (self.bullet_vertices, 3),
        ] {
            if got < required {
                return Err(GameError::InsufficientVertices { got, required });
            }
        }
        ensure_range(
            "asteroid_vertices",
            self.asteroid_min_vertices as f64,
            self.asteroid_max_vertices as f64,
        )?;
        ensure_range(
            "asteroid_radius",
            self.asteroid_min_radius as f64,
            self.asteroid_max_radius as f64,
        )?;
        ensure_range(
            "bullet_radius",
            self.bullet_min_radius as f64,
            self.bullet_max_radius as f64,
        )?;

        for (name, value) in [
            ("ship_length", self.ship_length),
            ("ship_base_width", self.ship_base_width),
            ("thrust", self.thrust),
            ("turn_speed", self.turn_speed),
            ("recoil", self.recoil),
            ("integration_dt_squared", self.integration_dt_squared),
            ("bounce_factor", self.bounce_factor),
            ("accel_epsilon", self.accel_epsilon),
            ("bullet_speed", self.bullet_speed),
            ("font_size", self.font_size),
        ] {
            ensure_finite(name, value as f64)?;
        }

        // Both bounds are strict, or pre-placement can only accept a single point.
        ensure_positive("edge_band", self.edge_band as f64)?;
        ensure_non_negative("spawn_margin", self.spawn_margin as f64)?;
        let short_side = self.screen_width.min(self.screen_height);
        ensure_below("edge_band (twice)", 2.0 * self.edge_band as f64, short_side as f64)?;
        ensure_below("spawn_margin", self.spawn_margin as f64, self.edge_band as f64)?;
        Ok(())
    }

    /// Seconds per simulation step.
    pub fn dt(&self) -> f32 {
        (1.0 / self.target_fps) as f32
    }

    /// Centre of the play field in screen space.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Play-field size in screen space.
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Parse and validation errors are logged but never abort the game; the
/// compiled defaults stay in place.  The fixed timestep is set from the final
/// `target_fps`, and the world is re-initialised so the ship starts at the
/// centre of the final play field.
pub fn load_game_config(
    mut config: ResMut<GameConfig>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut world: ResMut<GameWorld>,
) {
    match GameConfig::load(CONFIG_PATH) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Ok(None) => info!("No {CONFIG_PATH} found; using compiled defaults"),
        Err(e) => warn!("{e}; using compiled defaults"),
    }

    fixed_time.set_timestep_hz(config.target_fps);
    world.restart(&config);
}
