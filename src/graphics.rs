use crate::config::GameConfig;
use bevy::camera::{OrthographicProjection, Projection, ScalingMode};
use bevy::prelude::*;

/// Spawn the 2D camera with a fixed logical resolution.
///
/// `AutoMin` keeps the whole play field visible at any window size and
/// letterboxes the spare axis, so a resized window never crops the game.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: config.screen_width,
                min_height: config.screen_height,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
    info!(
        "Camera spawned for a {}x{} play field",
        config.screen_width, config.screen_height
    );
}

/// Map a simulation point (origin top-left, +Y down) to Bevy world space
/// (origin at the centre, +Y up).
pub fn screen_to_world(point: Vec2, config: &GameConfig) -> Vec2 {
    Vec2::new(
        point.x - config.screen_width / 2.0,
        config.screen_height / 2.0 - point.y,
    )
}
