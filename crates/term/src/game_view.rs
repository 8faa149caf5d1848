//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! While running, the view draws the background, a uniform grid of empty
//! cells, the locked board cells and the active piece inside a border. While
//! paused or after game over it replaces the playfield with a full-screen
//! overlay: a centered title and a clickable restart button.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub border: Rgb,
    /// Locked board cells
    pub board: Rgb,
    /// Active piece cells
    pub piece: Rgb,
    pub text: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            grid: Rgb::new(100, 100, 100),
            border: Rgb::new(200, 200, 200),
            board: Rgb::new(0, 0, 255),
            piece: Rgb::new(255, 0, 0),
            text: Rgb::new(255, 255, 255),
            button: Rgb::new(255, 255, 255),
            button_text: Rgb::new(0, 0, 0),
        }
    }
}

/// Where things ended up on screen for the frame just rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewLayout {
    /// Playfield inside the border (empty while an overlay is shown)
    pub board: Rect,
    /// Clickable restart button, only while an overlay is shown
    pub restart_button: Option<Rect>,
}

const RESTART_LABEL: &str = "Restart";

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Largest board (columns, rows) that fits the viewport inside a border.
    pub fn fit_board(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(2) / self.cell_w,
            viewport.height.saturating_sub(2) / self.cell_h,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> ViewLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', self.style(self.palette.text)));

        match snap.status {
            GameStatus::Running => ViewLayout {
                board: self.draw_playfield(fb, snap, viewport),
                restart_button: None,
            },
            GameStatus::Paused | GameStatus::GameOver => ViewLayout {
                board: Rect::default(),
                restart_button: Some(self.draw_overlay(fb, snap.status, viewport)),
            },
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> (FrameBuffer, ViewLayout) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.render_into(snap, viewport, &mut fb);
        (fb, layout)
    }

    fn style(&self, fg: Rgb) -> CellStyle {
        CellStyle::new(fg, self.palette.background)
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) -> Rect {
        let board_w = snap.width.saturating_mul(self.cell_w);
        let board_h = snap.height.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let inner = Rect::new(start_x + 1, start_y + 1, board_w, board_h);

        self.draw_border(fb, Rect::new(start_x, start_y, frame_w, frame_h));

        let grid = self.style(self.palette.grid);
        let locked = self.style(self.palette.board).bold();
        for y in 0..snap.height {
            for x in 0..snap.width {
                if snap.cell(x, y) {
                    self.fill_cell(fb, inner, x, y, '█', locked);
                } else {
                    self.fill_cell(fb, inner, x, y, '·', grid);
                }
            }
        }

        // Cells above the board are not drawn.
        let piece = self.style(self.palette.piece).bold();
        for &(x, y) in snap.active.iter() {
            if x >= 0 && y >= 0 && (x as u16) < snap.width && (y as u16) < snap.height {
                self.fill_cell(fb, inner, x as u16, y as u16, '█', piece);
            }
        }

        inner
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Rect) {
        if frame.width < 2 || frame.height < 2 {
            return;
        }
        let style = self.style(self.palette.border);
        let right = frame.x + frame.width - 1;
        let bottom = frame.y + frame.height - 1;

        fb.put_char(frame.x, frame.y, '┌', style);
        fb.put_char(right, frame.y, '┐', style);
        fb.put_char(frame.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in frame.x + 1..right {
            fb.put_char(x, frame.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in frame.y + 1..bottom {
            fb.put_char(frame.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, inner: Rect, x: u16, y: u16, ch: char, style: CellStyle) {
        let cell = Rect::new(
            inner.x.saturating_add(x.saturating_mul(self.cell_w)),
            inner.y.saturating_add(y.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
        );
        fb.fill_rect(cell, ch, style);
    }

    /// Full-screen status overlay; returns the restart button.
    fn draw_overlay(&self, fb: &mut FrameBuffer, status: GameStatus, viewport: Viewport) -> Rect {
        let text = self.style(self.palette.text).bold();
        fb.put_str_centered(0, viewport.width, viewport.height / 3, status.title(), text);

        let label_w = RESTART_LABEL.chars().count() as u16;
        let button_w = (viewport.width / 3).max(label_w + 4).min(viewport.width);
        let button_h = (viewport.height / 10).max(1);
        let button = Rect::new(
            viewport.width.saturating_sub(button_w) / 2,
            viewport.height / 2,
            button_w,
            button_h,
        );

        let fill = CellStyle::new(self.palette.button_text, self.palette.button);
        fb.fill_rect(button, ' ', fill);
        fb.put_str_centered(
            button.x,
            button.width,
            button.y + button.height / 2,
            RESTART_LABEL,
            fill.bold(),
        );

        let hint = match status {
            GameStatus::Paused => "p resume   r restart   q quit",
            _ => "r restart   q quit",
        };
        fb.put_str_centered(
            0,
            viewport.width,
            button.y.saturating_add(button.height).saturating_add(1),
            hint,
            self.style(self.palette.grid),
        );

        button
    }
}
