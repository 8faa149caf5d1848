use fallgrid::core::{Game, GameConfig, GameSnapshot};
use fallgrid::term::{GameView, Palette, Rgb, Viewport};
use fallgrid::types::{GameStatus, Rect};

fn snapshot() -> GameSnapshot {
    Game::new(GameConfig::default(), 1).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let (fb, _) = view.render(&snapshot(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = snapshot();
    snap.board[19 * 10] = true;
    snap.active.clear();

    let palette = Palette::default();
    let view = GameView::default();
    let (fb, _) = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, palette.board);
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_in_piece_color() {
    let snap = snapshot();
    let view = GameView::default();
    let (fb, layout) = view.render(&snap, Viewport::new(22, 22));

    for &(x, y) in snap.active.iter() {
        let cell = fb
            .get(layout.board.x + x as u16 * 2, layout.board.y + y as u16)
            .unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Palette::default().piece);
    }
}

#[test]
fn term_view_centers_board_in_larger_viewport() {
    let view = GameView::default();
    let (_, layout) = view.render(&snapshot(), Viewport::new(80, 24));
    assert_eq!(layout.board, Rect::new(30, 2, 20, 20));
}

#[test]
fn term_view_game_over_overlay_hides_board() {
    let mut snap = snapshot();
    snap.status = GameStatus::GameOver;
    snap.board.iter_mut().for_each(|cell| *cell = true);

    let view = GameView::default();
    let (fb, layout) = view.render(&snap, Viewport::new(60, 30));

    assert!(fb.row_text(10).contains("Game Over"));
    let button = layout.restart_button.unwrap();
    assert!(fb
        .row_text(button.y + button.height / 2)
        .contains("Restart"));
    for y in 0..30 {
        assert!(!fb.row_text(y).contains('█'));
    }
}

#[test]
fn term_view_uses_custom_palette() {
    let palette = Palette {
        piece: Rgb::new(0, 255, 0),
        ..Palette::default()
    };
    let view = GameView::default().with_palette(palette);
    let snap = snapshot();
    let (fb, layout) = view.render(&snap, Viewport::new(22, 22));

    let (x, y) = snap.active[0];
    let cell = fb
        .get(layout.board.x + x as u16 * 2, layout.board.y + y as u16)
        .unwrap();
    assert_eq!(cell.style.fg, Rgb::new(0, 255, 0));
}
