//! Ship outline gizmo.
//!
//! The outline drawn here is the same three-point hull the simulation uses
//! for wall and asteroid tests, so what you see is what collides.

use crate::config::GameConfig;
use crate::graphics::screen_to_world;
use crate::simulation::GameWorld;
use bevy::prelude::*;

const SHIP_COLOR: Color = Color::WHITE;

/// Draw the ship as a closed triangle outline.
///
/// The ship stays on screen after game over, frozen where it was hit.
pub fn player_gizmo_system(mut gizmos: Gizmos, world: Res<GameWorld>, config: Res<GameConfig>) {
    let hull = world.player.hull(&config).map(|p| screen_to_world(p, &config));
    for i in 0..hull.len() {
        gizmos.line_2d(hull[i], hull[(i + 1) % hull.len()], SHIP_COLOR);
    }
}
