//! Centralised gameplay constants.
//!
//! Every tuneable value lives here so it can be found and reasoned about in one
//! place.  These are the compiled defaults behind [`crate::config::GameConfig`];
//! `assets/game.toml` can override any of them at startup.
//!
//! All distances are in logical screen pixels (origin top-left, +Y down) and
//! all per-frame quantities assume the fixed simulation rate [`TARGET_FPS`].

// ── Play Field ────────────────────────────────────────────────────────────────

/// Logical width of the play field.  The camera scales this to the window.
pub const SCREEN_WIDTH: f32 = 1920.0;

/// Logical height of the play field.
pub const SCREEN_HEIGHT: f32 = 1080.0;

/// Fixed simulation rate (steps per second).
///
/// Frame-counted timers (ammo regeneration, asteroid spawning) and turn speed
/// are expressed per step, so changing this changes the pace of the game.
pub const TARGET_FPS: f64 = 60.0;

// ── Ship Geometry ─────────────────────────────────────────────────────────────

/// Distance from the ship centre to its nose.
pub const SHIP_LENGTH: f32 = 50.0;

/// Width of the ship's base.  Half of this is the distance from the centre to
/// each base corner.
pub const SHIP_BASE_WIDTH: f32 = 35.0;

// ── Ship Movement ─────────────────────────────────────────────────────────────

/// Acceleration added along the facing direction for every frame thrust is held.
pub const THRUST: f32 = 1.0;

/// Degrees turned per frame while a turn key is held.
pub const TURN_SPEED: f32 = 5.0;

/// Acceleration removed along the facing direction for every bullet fired.
pub const RECOIL: f32 = 0.05;

/// The dt² factor of the ship displacement term `0.5 · a · dt²`.
///
/// Kept at 1.0: acceleration is applied directly as per-frame displacement.
/// Lowering it makes the ship feel heavier without touching thrust.
pub const INTEGRATION_DT_SQUARED: f32 = 1.0;

/// On a wall hit the acceleration is multiplied by `-BOUNCE_FACTOR`.
pub const BOUNCE_FACTOR: f32 = 0.5;

/// Acceleration components with a smaller magnitude snap to zero.
pub const ACCEL_EPSILON: f32 = 0.01;

// ── Pools and Ammo ────────────────────────────────────────────────────────────

/// Maximum live asteroids.  Spawn attempts beyond this are dropped.
pub const MAX_ASTEROIDS: usize = 100;

/// Maximum live bullets.  Shots beyond this are dropped.
pub const MAX_BULLETS: usize = 500;

/// Ammo cap; the ship also starts with a full magazine.
pub const MAX_AMMO: u32 = 500;

/// One round is regenerated every this many frames (half a second at 60 Hz).
pub const AMMO_REGEN_INTERVAL_FRAMES: u64 = 30;

// ── Asteroid Spawning ─────────────────────────────────────────────────────────

/// One asteroid spawn attempt every this many frames (one second at 60 Hz).
pub const ASTEROID_SPAWN_INTERVAL_FRAMES: u64 = 60;

/// Inclusive vertex-count range for generated asteroids.
pub const ASTEROID_MIN_VERTICES: usize = 3;
pub const ASTEROID_MAX_VERTICES: usize = 15;

/// Range of the per-vertex radius of generated asteroids.
pub const ASTEROID_MIN_RADIUS: f32 = 50.0;
pub const ASTEROID_MAX_RADIUS: f32 = 100.0;

/// Pre-placement keeps generated asteroids at least this far from the edges.
pub const SPAWN_MARGIN: f32 = 50.0;

/// Width of each of the four edge spawn bands.  Pre-placement also rejects
/// anything further than this from an edge (the centre belongs to the ship).
pub const EDGE_BAND: f32 = 150.0;

/// Divisor of the centre distance in the approach-speed policy:
/// `velocity = to_centre / (|to_centre| / divisor + score)`.
///
/// At a score of zero every asteroid approaches at exactly this many pixels per
/// second, so larger values make fresh asteroids faster; the `+ score` term
/// slows the field as the score grows.
pub const APPROACH_DISTANCE_DIVISOR: f32 = 10.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Bullets are small irregular quads.
pub const BULLET_VERTICES: usize = 4;
pub const BULLET_MIN_RADIUS: f32 = 3.0;
pub const BULLET_MAX_RADIUS: f32 = 5.0;

/// Bullet speed in pixels per second.
pub const BULLET_SPEED: f32 = 500.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Base HUD font size.  The game-over headline uses 3× and the hint 2×.
pub const FONT_SIZE: f32 = 20.0;
