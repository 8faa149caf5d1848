//! Terminal input module (game-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key and
//! mouse events into [`crate::types::GameAction`]s and decides when the player
//! wants to quit. The game loop consults it before the game sees any input.

pub mod map;

pub use fallgrid_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
