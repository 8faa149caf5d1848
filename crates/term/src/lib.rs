//! Terminal "game renderer" module - the presentation surface.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal as a
//! diff against the previous frame.
//!
//! - [`fb`]: framebuffer, cells and colors
//! - [`game_view`]: draws the playfield and the pause/game-over overlays
//! - [`renderer`]: terminal session lifecycle and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fallgrid_core as core;
pub use fallgrid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, ViewLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
