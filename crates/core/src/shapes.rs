//! Shapes module - the shape catalog and matrix rotation
//!
//! Every piece is a rectangular boolean matrix of at most 4x4 cells. Shapes
//! are stored by value in a fixed backing array, so a rotated copy never
//! shares storage with the catalog entry it came from.

use crate::types::PieceKind;

/// Largest row/column count of any shape (the I piece is 1x4 / 4x1).
pub const MAX_SHAPE_SIDE: usize = 4;

/// A rectangular boolean matrix of `rows x cols` cells.
///
/// Cells outside `rows x cols` in the backing array are always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from row slices of 0/1 values.
    ///
    /// Rows must be non-empty, equally long, and at most 4x4.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_SIDE);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_SIDE);

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < rows.len() {
            assert!(rows[r].len() == cols);
            let mut c = 0;
            while c < cols {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Catalog shape for a piece kind.
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::J => J_SHAPE,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell at (row, col); `false` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Filled cells as `(col, row)` offsets from the top-left corner, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols())
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col, row))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate 90° clockwise.
    ///
    /// Reads the matrix column by column and reverses each column, so
    /// `new[i][j] = old[rows - 1 - j][i]` and the dimensions swap.
    pub fn rotated(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, new_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, cell) in new_row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - j][i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

pub const I_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1, 1]]);
pub const O_SHAPE: Shape = Shape::from_rows(&[&[1, 1], &[1, 1]]);
pub const S_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
pub const Z_SHAPE: Shape = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]);
pub const T_SHAPE: Shape = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
pub const L_SHAPE: Shape = Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]);
pub const J_SHAPE: Shape = Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]);
