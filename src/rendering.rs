//! Rendering systems: polygon outlines, HUD text and the game-over overlay.
//!
//! ## Layer Model
//!
//! | Layer              | Technology | Visible            |
//! |--------------------|------------|--------------------|
//! | Asteroid outlines  | Gizmos     | always             |
//! | Bullet outlines    | Gizmos     | always             |
//! | Ship outline       | Gizmos     | always             |
//! | Ammo / score HUD   | Bevy UI    | always             |
//! | Game-over overlay  | Bevy UI    | while game is over |
//!
//! ## System Responsibilities
//!
//! | System                      | Schedule | Purpose                          |
//! |-----------------------------|----------|----------------------------------|
//! | `setup_camera`              | Startup  | Spawn the 2D camera              |
//! | `setup_hud`                 | Startup  | Spawn ammo and score text        |
//! | `setup_game_over_overlay`   | Startup  | Spawn hidden game-over overlay   |
//! | `shape_gizmo_system`        | Update   | Draw asteroids and bullets       |
//! | `player_gizmo_system`       | Update   | Draw the ship                    |
//! | `hud_text_system`           | Update   | Refresh every `HudField` text    |
//! | `game_over_overlay_system`  | Update   | Show/hide the overlay            |
//!
//! Every system here only reads [`GameWorld`].

use crate::config::{load_game_config, GameConfig};
use crate::graphics::{screen_to_world, setup_camera};
use crate::player::player_gizmo_system;
use crate::shape::{Shape, ShapeKind};
use crate::simulation::GameWorld;
use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            // After config so layout and camera see the final screen size.
            (setup_camera, setup_hud, setup_game_over_overlay).after(load_game_config),
        )
        .add_systems(
            Update,
            (
                shape_gizmo_system,
                player_gizmo_system,
                hud_text_system,
                game_over_overlay_system,
            ),
        );
    }
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Which piece of world state a text node shows.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudField {
    Ammo,
    Score,
    FinalScore,
    BestScore,
}

impl HudField {
    pub fn render(self, world: &GameWorld) -> String {
        match self {
            Self::Ammo => format!("Bullets: {}", world.player.ammo),
            Self::Score => format!("Score: {}", world.score),
            Self::FinalScore => format!("Game Over, you scored {}", world.score),
            Self::BestScore => format!("Best this session: {}", world.best_score),
        }
    }
}

/// Root node of the game-over overlay.
#[derive(Component)]
pub struct GameOverRoot;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn shape_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Asteroid => Color::WHITE,
        ShapeKind::Bullet => Color::srgb(1.0, 0.85, 0.3),
    }
}

fn hint_color() -> Color {
    Color::srgb(0.65, 0.65, 0.65)
}

// ── Startup: HUD ──────────────────────────────────────────────────────────────

/// Spawn the ammo and score lines in the bottom-left corner.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            for field in [HudField::Ammo, HudField::Score] {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: config.font_size,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    field,
                ));
            }
        });
}

/// Spawn the centred game-over overlay, hidden until the ship is hit.
pub fn setup_game_over_overlay(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            Visibility::Hidden,
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.font_size * 3.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                HudField::FinalScore,
            ));
            overlay.spawn((
                Text::new("Press R to retry"),
                TextFont {
                    font_size: config.font_size * 2.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            overlay.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.font_size,
                    ..default()
                },
                TextColor(hint_color()),
                HudField::BestScore,
            ));
        });
}

// ── Update: gizmos ────────────────────────────────────────────────────────────

fn draw_outline(gizmos: &mut Gizmos, shape: &Shape, config: &GameConfig) {
    let color = shape_color(shape.kind);
    for (a, b) in shape.edges() {
        gizmos.line_2d(screen_to_world(a, config), screen_to_world(b, config), color);
    }
}

/// Draw every live asteroid and bullet as a closed outline.
pub fn shape_gizmo_system(mut gizmos: Gizmos, world: Res<GameWorld>, config: Res<GameConfig>) {
    for shape in world.asteroids.iter().chain(world.bullets.iter()) {
        draw_outline(&mut gizmos, shape, &config);
    }
}

// ── Update: text ──────────────────────────────────────────────────────────────

pub fn hud_text_system(world: Res<GameWorld>, mut query: Query<(&mut Text, &HudField)>) {
    if !world.is_changed() {
        return;
    }
    for (mut text, field) in query.iter_mut() {
        let rendered = field.render(&world);
        if text.0 != rendered {
            text.0 = rendered;
        }
    }
}

pub fn game_over_overlay_system(
    world: Res<GameWorld>,
    mut query: Query<&mut Visibility, With<GameOverRoot>>,
) {
    let vis = if world.game_over {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut v in query.iter_mut() {
        if *v != vis {
            *v = vis;
        }
    }
}
