//! Board tests - placement rules, locking and row clearing

use fallgrid::core::{Board, Piece};
use fallgrid::types::PieceKind;

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 200);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(false), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_set_out_of_bounds() {
    let mut board = Board::new(10, 20);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, 20, true));
    assert!(board.set(9, 19, true));
    assert!(board.is_occupied(9, 19));
}

#[test]
fn test_every_kind_fits_at_spawn_on_empty_board() {
    let board = Board::new(10, 20);
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, board.width());
        assert!(board.is_valid_placement(&piece), "{kind:?} should fit");
    }
}

#[test]
fn test_i_piece_spawn_cells() {
    let piece = Piece::spawn(PieceKind::I, 10);
    assert_eq!(piece.cells().as_slice(), &[(3, 0), (4, 0), (5, 0), (6, 0)]);
}

#[test]
fn test_left_move_at_wall_is_rejected() {
    let board = Board::new(10, 20);
    let piece = Piece::new(PieceKind::O, 0, 5);
    assert!(board.is_valid_placement(&piece));
    assert!(!board.is_valid_placement(&piece.translate(-1, 0)));
}

#[test]
fn test_right_wall_and_floor_are_rejected() {
    let board = Board::new(10, 20);
    let o = Piece::new(PieceKind::O, 8, 18);
    assert!(board.is_valid_placement(&o));
    assert!(!board.is_valid_placement(&o.translate(1, 0)));
    assert!(!board.is_valid_placement(&o.translate(0, 1)));
}

#[test]
fn test_overlap_with_locked_cell_is_rejected() {
    let mut board = Board::new(10, 20);
    board.set(4, 10, true);
    assert!(!board.is_valid_placement(&Piece::new(PieceKind::O, 3, 9)));
    assert!(board.is_valid_placement(&Piece::new(PieceKind::O, 5, 9)));
}

#[test]
fn test_rows_above_board_are_open() {
    let board = Board::new(10, 20);
    let piece = Piece::new(PieceKind::I, 0, 0).rotate().translate(0, -2);
    assert!(board.is_valid_placement(&piece));
    assert!(!board.is_valid_placement(&piece.translate(-1, 0)));
}

#[test]
fn test_lock_writes_cells_inside_board_only() {
    let mut board = Board::new(10, 20);
    let piece = Piece::new(PieceKind::I, 2, 0).rotate().translate(0, -2);
    board.lock(&piece);
    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_occupied(2, 0));
    assert!(board.is_occupied(2, 1));
}

#[test]
fn test_o_piece_completes_bottom_row() {
    let mut board = Board::from_rows(&[
        "..........",
        "#.........",
        "####..####",
    ]);
    let o = Piece::new(PieceKind::O, 4, 1);
    assert!(board.is_valid_placement(&o));
    assert!(!board.is_valid_placement(&o.translate(0, 1)));

    board.lock(&o);
    assert_eq!(board.clear_full_rows(), 1);

    // Row above shifted down, with the O's upper half beside it.
    assert_eq!(
        board,
        Board::from_rows(&[
            "..........",
            "..........",
            "#...##....",
        ])
    );
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::from_rows(&[
        "#...",
        "####",
        ".#..",
        "####",
        "..#.",
    ]);
    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(
        board,
        Board::from_rows(&[
            "....",
            "....",
            "#...",
            ".#..",
            "..#.",
        ])
    );
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let rows = ["....", ".##.", "###."];
    let mut board = Board::from_rows(&rows);
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, Board::from_rows(&rows));
}

#[test]
fn test_clear_every_row() {
    let mut board = Board::from_rows(&["###", "###"]);
    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.height(), 2);
}

#[test]
fn test_lock_then_clear_keeps_cells_outside_full_rows() {
    let base = Board::from_rows(&[
        "......",
        "......",
        "#.....",
        "##.###",
        "###.##",
    ]);
    for kind in PieceKind::ALL {
        for x in -1..6 {
            let mut board = base.clone();
            let mut piece = Piece::new(kind, x, 0);
            if !board.is_valid_placement(&piece) {
                continue;
            }
            while board.is_valid_placement(&piece.translate(0, 1)) {
                piece = piece.translate(0, 1);
            }

            board.lock(&piece);
            let before = board.occupied_count();
            let cleared = board.clear_full_rows();
            assert_eq!(
                board.occupied_count(),
                before - cleared * board.width() as usize,
                "{kind:?} at x={x}"
            );
            assert_eq!(board.height(), 5);
        }
    }
}

#[test]
fn test_o_dropped_in_left_corner_clears_one_row() {
    let mut board = Board::new(10, 20);
    for x in 2..10 {
        board.set(x, 19, true);
    }

    let mut o = Piece::new(PieceKind::O, 0, 0);
    while board.is_valid_placement(&o.translate(0, 1)) {
        o = o.translate(0, 1);
    }
    assert_eq!((o.x, o.y), (0, 18));

    board.lock(&o);
    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.row(19).unwrap()[..3], [true, true, false]);
    assert_eq!(board.occupied_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|&cell| !cell));
}
