//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: Any presentation surface can drive it
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven-shape catalog and 90° matrix rotation
//! - [`board`]: fixed-size grid with placement checks, locking and row clearing
//! - [`piece`]: a shape at an offset; candidate moves and rotations
//! - [`rng`]: seeded uniform piece selection
//! - [`game`]: the `Running / Paused / GameOver` controller
//! - [`snapshot`]: render state handed to the presentation surface
//!
//! # Game Rules
//!
//! - Pieces spawn centered at row 0; a spawn that overlaps the board ends the game
//! - Moves and rotations are validated before they commit; invalid ones are dropped
//! - Rotation is a plain 90° clockwise matrix turn with no wall kicks
//! - A piece that cannot descend locks, then full rows are cleared
//! - Descent happens on a fixed interval, independent of the frame rate
//!
//! # Example
//!
//! ```
//! use fallgrid_core::{Game, GameConfig};
//! use fallgrid_types::{GameAction, GameStatus};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(500);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use fallgrid_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Descent, Game, GameConfig};
pub use piece::{Piece, PieceCells};
pub use rng::SimpleRng;
pub use shapes::Shape;
pub use snapshot::GameSnapshot;
