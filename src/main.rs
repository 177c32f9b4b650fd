use bevy::prelude::*;
use bevy::window::WindowResolution;
use polygon_asteroids::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use polygon_asteroids::rendering::RenderingPlugin;
use polygon_asteroids::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Asteroids".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                resizable: true,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Config, intent and world resources plus the fixed-rate step;
        // load_game_config overwrites the defaults from assets/game.toml.
        .add_plugins(SimulationPlugin)
        .add_plugins(RenderingPlugin)
        .run();
}
