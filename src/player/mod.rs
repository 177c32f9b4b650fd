//! Player module: ship state, keyboard input, and ship rendering.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | [`Player`] ship data (turn, thrust, recoil, bounded integration, ammo) and the [`ShipIntent`] resource |
//! | [`control`] | Keyboard → `ShipIntent` |
//! | [`rendering`] | Ship outline gizmo |
//!
//! All public items are re-exported at this level so the rest of the crate can
//! use flat `crate::player::*` imports.

pub mod control;
pub mod rendering;
pub mod state;

pub use control::keyboard_to_intent_system;
pub use rendering::player_gizmo_system;
pub use state::{Player, ShipIntent};
