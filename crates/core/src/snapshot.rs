use crate::piece::PieceCells;
use crate::types::{Cell, GameStatus};

/// Everything the presentation surface needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub width: u16,
    pub height: u16,
    /// Row-major board cells, `width * height` long
    pub board: Vec<Cell>,
    /// Absolute cells of the active piece (empty when there is none)
    pub active: PieceCells,
}

impl GameSnapshot {
    /// Board cell at (x, y); false outside the board
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }
}
