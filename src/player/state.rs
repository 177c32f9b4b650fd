//! Ship state and the per-frame input abstraction.
//!
//! [`Player`] is plain data owned by [`crate::simulation::GameWorld`]; the
//! systems that feed it live in the sibling modules:
//! - [`super::control`]: keyboard → [`ShipIntent`]
//! - [`super::rendering`]: ship outline gizmo

use crate::config::GameConfig;
use crate::geometry::{heading, is_off_screen, rotate_point};
use bevy::prelude::*;

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player's ship.
///
/// There is no velocity: acceleration is integrated straight into position
/// and then decays (bounce halving, epsilon snapping) on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Ship centre in screen space.
    pub position: Vec2,
    pub acceleration: Vec2,
    /// Facing in degrees, 0 = screen-up, always in `[0, 360)`.
    pub angle: f32,
    pub ammo: u32,
}

impl Player {
    /// Fresh ship at the centre of the play field, facing up, full magazine.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.center(),
            acceleration: Vec2::ZERO,
            angle: 0.0,
            ammo: config.max_ammo,
        }
    }

    /// Unit vector the nose points along.
    pub fn facing(&self) -> Vec2 {
        heading(self.angle)
    }

    /// Nose, base-left and base-right corners at the current position.
    pub fn hull(&self, config: &GameConfig) -> [Vec2; 3] {
        Self::hull_at(self.position, self.angle, config)
    }

    /// Hull corners for a ship centred on `position` facing `angle`.
    pub fn hull_at(position: Vec2, angle: f32, config: &GameConfig) -> [Vec2; 3] {
        let half_base = config.ship_base_width / 2.0;
        [
            position + rotate_point(Vec2::new(0.0, -config.ship_length), angle),
            position + rotate_point(Vec2::new(0.0, -half_base), angle - 120.0),
            position + rotate_point(Vec2::new(0.0, -half_base), angle + 120.0),
        ]
    }

    pub fn nose(&self, config: &GameConfig) -> Vec2 {
        self.hull(config)[0]
    }

    /// Turn by `degrees` and wrap into `[0, 360)`.
    pub fn turn(&mut self, degrees: f32) {
        let wrapped = (self.angle + degrees).rem_euclid(360.0);
        // rem_euclid can round a tiny negative up to exactly 360.
        self.angle = if wrapped >= 360.0 { 0.0 } else { wrapped };
    }

    /// Accelerate along the nose.
    pub fn thrust(&mut self, magnitude: f32) {
        self.acceleration += self.facing() * magnitude;
    }

    /// Kick backwards after a shot.
    pub fn recoil(&mut self, magnitude: f32) {
        self.acceleration -= self.facing() * magnitude;
    }

    /// Turn and thrust from the held controls.  Firing is handled by the world,
    /// which owns the bullet pool.
    pub fn steer(&mut self, intent: &ShipIntent, config: &GameConfig) {
        if intent.turn_left {
            self.turn(-config.turn_speed);
        }
        if intent.turn_right {
            self.turn(config.turn_speed);
        }
        if intent.thrust {
            self.thrust(config.thrust);
        }
    }

    /// Advance one frame.  Returns `true` if the ship bounced off a wall.
    ///
    /// The move is rejected when the new centre or either base corner would
    /// leave the play field; acceleration is then reversed and damped by
    /// `bounce_factor` instead.  Components below `accel_epsilon` snap to zero
    /// afterwards.
    pub fn integrate(&mut self, config: &GameConfig) -> bool {
        let candidate =
            self.position + 0.5 * self.acceleration * config.integration_dt_squared;
        let [_, base_left, base_right] = Self::hull_at(candidate, self.angle, config);
        let size = config.screen_size();

        let bounced = [candidate, base_left, base_right]
            .iter()
            .any(|&p| is_off_screen(p, size));
        if bounced {
            self.acceleration *= -config.bounce_factor;
        } else {
            self.position = candidate;
        }

        if self.acceleration.x.abs() < config.accel_epsilon {
            self.acceleration.x = 0.0;
        }
        if self.acceleration.y.abs() < config.accel_epsilon {
            self.acceleration.y = 0.0;
        }
        bounced
    }

    /// Spend one round.  Returns `false` with an empty magazine.
    pub fn take_round(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Regenerate one round, clamped to `max_ammo`.
    pub fn regenerate_ammo(&mut self, max_ammo: u32) {
        self.ammo = self.ammo.saturating_add(1).min(max_ammo);
    }
}

// ── Input Abstraction ──────────────────────────────────────────────────────────

/// Aggregated control state for the next simulation step.
///
/// The held flags are overwritten every `Update` frame by
/// [`super::control::keyboard_to_intent_system`].  `restart` is latched on key
/// press and cleared by the simulation once consumed, so a press that happens
/// between two fixed steps is never lost.  Tests populate this directly.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub restart: bool,
}
