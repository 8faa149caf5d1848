//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is either empty or
//! occupied. Dimensions are chosen at construction and never change.
//! Uses a flat row-major vector for cache locality; clearing rows moves cells
//! in place instead of allocating new rows.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom).

use crate::piece::Piece;
use crate::types::Cell;

/// The game board - flat row-major storage of `width * height` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check whether a single piece cell may sit at (x, y).
    ///
    /// Rows above the board (`y < 0`) are open space as long as the column is
    /// in range.
    pub fn is_open(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check that every filled cell of `piece` is inside the columns, above
    /// the floor, and not overlapping a locked cell.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.is_open(x, y))
    }

    /// Copy the piece's filled cells into the board.
    ///
    /// Cells above the board are dropped. Callers only lock a piece at a
    /// position that passed [`Board::is_valid_placement`].
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, true);
        }
    }

    /// Row `y` as a slice, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&cell| cell))
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom;
    /// the same number of empty rows appear at the top, so the row count
    /// stays `height`. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Fresh empty rows on top
        self.cells[..write_y * width].fill(false);

        cleared
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows, `#` for occupied and anything else empty.
    ///
    /// Intended for tests and benches.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate().take(width as usize) {
                board.set(x as i16, y as i16, ch == '#');
            }
        }
        board
    }
}
