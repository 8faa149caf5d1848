//! Piece tests - catalog shapes and clockwise rotation

use fallgrid::core::{Piece, Shape};
use fallgrid::types::PieceKind;

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::of(kind).filled_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let back = shape.rotated().rotated().rotated().rotated();
        assert_eq!(back, shape, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let rotated = shape.rotated();
        assert_eq!((rotated.rows(), rotated.cols()), (shape.cols(), shape.rows()));
        assert_eq!(rotated.filled_count(), 4);
    }
}

#[test]
fn test_o_rotation_is_unchanged() {
    let o = Shape::of(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_s_rotates_clockwise() {
    // ##.      .#
    // .##  ->  ##
    //          #.
    let s = Shape::of(PieceKind::S).rotated();
    let cells: Vec<_> = s.filled().collect();
    assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (0, 2)]);
}

#[test]
fn test_piece_rotation_keeps_offset() {
    let piece = Piece::new(PieceKind::L, 3, 4);
    let rotated = piece.rotate();
    assert_eq!((rotated.x, rotated.y), (3, 4));
    assert_eq!(rotated.kind, PieceKind::L);
    assert_eq!(rotated.rotate().rotate().rotate(), piece);
}
