//! Keyboard input → [`ShipIntent`].
//!
//! | Key                | Intent       | Semantics            |
//! |--------------------|--------------|----------------------|
//! | `A` / `←`          | `turn_left`  | held                 |
//! | `D` / `→`          | `turn_right` | held                 |
//! | `W` / `↑`          | `thrust`     | held                 |
//! | `Space`            | `fire`       | held (auto-fire)     |
//! | `R`                | `restart`    | latched on press     |
//!
//! The intent layer keeps the simulation testable: tests write `ShipIntent`
//! directly and never touch `ButtonInput`.

use super::state::ShipIntent;
use bevy::prelude::*;

const TURN_LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const TURN_RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const THRUST_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];

/// Sample the keyboard into [`ShipIntent`].
///
/// Held flags are overwritten each frame.  `restart` is only ever set here;
/// the fixed-step simulation clears it after acting on it.
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ShipIntent>) {
    intent.turn_left = keys.any_pressed(TURN_LEFT_KEYS);
    intent.turn_right = keys.any_pressed(TURN_RIGHT_KEYS);
    intent.thrust = keys.any_pressed(THRUST_KEYS);
    intent.fire = keys.pressed(KeyCode::Space);
    if keys.just_pressed(KeyCode::KeyR) {
        intent.restart = true;
    }
}
