//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core rules, the input mapping and the terminal view alike.
//!
//! # Board Dimensions
//!
//! The board has no compile-time size. Its width is derived from the terminal
//! geometry at startup (or pinned by configuration) and its height defaults to
//! [`DEFAULT_BOARD_HEIGHT`] rows:
//!
//! - Columns are indexed `0..width` (left to right)
//! - Rows are indexed `0..height` (top to bottom)
//! - New pieces spawn centered horizontally at row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DESCENT_INTERVAL_MS` | 500 | Time between automatic one-row descents |
//! | `FRAME_RATE` | 30 | Render/input polling rate (frames per second) |
//!
//! The descent interval is fixed: there are no levels and no speed curve.
//!
//! # Examples
//!
//! ```
//! use fallgrid_types::{GameAction, GameStatus, PieceKind};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(GameAction::Rotate.as_str(), "rotate");
//! assert!(GameStatus::Paused.shows_overlay());
//! ```

/// Default board height in rows.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Fallback board width when no terminal geometry is available.
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Widest board; board coordinates are `i16`.
pub const MAX_BOARD_WIDTH: u16 = 1024;

/// Tallest board; board coordinates are `i16`.
pub const MAX_BOARD_HEIGHT: u16 = 1024;

/// Narrowest board that still fits every shape in the catalog.
pub const MIN_BOARD_WIDTH: u16 = 4;

/// Shortest board that still fits every shape in the catalog.
pub const MIN_BOARD_HEIGHT: u16 = 4;

/// Time between automatic one-row descents (milliseconds).
pub const DESCENT_INTERVAL_MS: u32 = 500;

/// Render/input frame rate (frames per second).
pub const FRAME_RATE: u32 = 30;

/// A cell on the game board: `true` when occupied.
///
/// Locked cells keep no color or piece identity.
pub type Cell = bool;

/// The seven piece kinds of the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Single uppercase letter used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Game actions produced by the input layer.
///
/// Quitting is not an action: the game loop handles it before the game sees
/// any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Pause when running, resume when paused
    Pause,
    /// Start a fresh game (only from Paused or GameOver)
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Game status (the controller's state machine).
///
/// ```text
/// Running --Pause--> Paused --Pause--> Running
/// Paused --Restart--> Running (fresh game)
/// Running --spawn blocked--> GameOver --Restart--> Running (fresh game)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    /// Paused and GameOver show a modal overlay with a restart button.
    pub fn shows_overlay(&self) -> bool {
        !self.is_running()
    }

    /// Overlay title text.
    pub fn title(&self) -> &'static str {
        match self {
            GameStatus::Running => "",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
        }
    }
}

/// Axis-aligned rectangle in terminal cells.
///
/// Used for the clickable restart button of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether the cell at (column, row) is inside the rectangle
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column - self.x) < self.width
            && (row - self.y) < self.height
    }
}
