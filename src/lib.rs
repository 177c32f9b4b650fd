//! Polygon asteroids library
//!
//! A vector-outline arcade shooter: a thrust-and-rotate ship, procedurally
//! generated polygon asteroids homing on the centre of the screen, and
//! polygon bullets.  The game state and its fixed-rate step are plain Rust in
//! [`simulation`]; Bevy plugins wrap it for input, timing and drawing.

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod player;
pub mod pool;
pub mod rendering;
pub mod shape;
pub mod simulation;
pub mod spawner;
