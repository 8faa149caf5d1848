//! Piece module - the falling piece
//!
//! A piece is a shape plus the board offset of the shape's top-left corner.
//! Moves and rotations never mutate a piece: they produce a candidate that the
//! caller validates against the board before committing.

use arrayvec::ArrayVec;

use crate::shapes::{Shape, MAX_SHAPE_SIDE};
use crate::types::PieceKind;

/// Absolute board cells of a piece (at most a full 4x4 shape).
pub type PieceCells = ArrayVec<(i16, i16), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i16,
    /// Row of the shape's top-left corner
    pub y: i16,
}

impl Piece {
    /// Catalog shape at an explicit offset
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            x,
            y,
        }
    }

    /// Catalog shape centered horizontally on a board of `board_width` columns, at row 0
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        let shape = Shape::of(kind);
        let x = (board_width / 2) as i16 - (shape.cols() / 2) as i16;
        Self { kind, shape, x, y: 0 }
    }

    /// Candidate rotated 90° clockwise about the same top-left offset
    pub fn rotate(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Candidate shifted by (dx, dy)
    pub fn translate(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute (x, y) of every filled cell
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .map(|(col, row)| (self.x + col as i16, self.y + row as i16))
            .collect()
    }
}
