//! Game module - the game controller
//!
//! [`Game`] owns the board, the active piece and the RNG, and advances them
//! through the `Running / Paused / GameOver` state machine. It is driven by
//! two inputs only: [`Game::apply_action`] for player actions and
//! [`Game::tick`] for elapsed wall-clock time. Neither performs I/O.

use log::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameAction, GameStatus, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DESCENT_INTERVAL_MS,
};

/// Construction parameters for a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Time between automatic one-row descents
    pub descent_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            descent_interval_ms: DESCENT_INTERVAL_MS,
        }
    }
}

/// Result of one descent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved down one row
    Moved,
    /// The piece locked and a new piece spawned
    Locked { cleared: usize },
    /// The piece locked and the next piece could not be placed
    GameOver { cleared: usize },
    /// Nothing to move (no active piece)
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    status: GameStatus,
    /// Time accumulated since the last descent step
    drop_timer_ms: u32,
    pieces_spawned: u32,
    lines_cleared: u32,
}

impl Game {
    /// Create a running game with an empty board and a freshly spawned piece
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut game = Self {
            config,
            board: Board::new(config.board_width, config.board_height),
            active: None,
            rng: SimpleRng::new(seed),
            status: GameStatus::Running,
            drop_timer_ms: 0,
            pieces_spawned: 0,
            lines_cleared: 0,
        };
        game.spawn_piece();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Apply a player action.
    ///
    /// Returns true if the action changed the game. Actions without a
    /// transition in the current status are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.status, action) {
            (GameStatus::Running, GameAction::MoveLeft) => self.try_move(-1, 0),
            (GameStatus::Running, GameAction::MoveRight) => self.try_move(1, 0),
            (GameStatus::Running, GameAction::MoveDown) => self.try_move(0, 1),
            (GameStatus::Running, GameAction::Rotate) => self.try_rotate(),
            (GameStatus::Running, GameAction::Pause) => {
                self.status = GameStatus::Paused;
                info!("paused");
                true
            }
            (GameStatus::Paused, GameAction::Pause) => {
                self.status = GameStatus::Running;
                info!("resumed");
                true
            }
            (GameStatus::Paused | GameStatus::GameOver, GameAction::Restart) => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    /// Advance the descent timer by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the descent interval the timer
    /// resets and the piece takes one descent step. Does nothing unless
    /// running, so the timer is preserved across a pause.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Descent> {
        if !self.status.is_running() {
            return None;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.config.descent_interval_ms {
            return None;
        }

        self.drop_timer_ms = 0;
        Some(self.step_down())
    }

    /// Move the piece down one row, or lock it if it cannot move.
    ///
    /// Locking copies the piece into the board, clears full rows and spawns
    /// the next piece; if that piece does not fit the game is over.
    pub fn step_down(&mut self) -> Descent {
        let Some(active) = self.active else {
            return Descent::Idle;
        };

        let candidate = active.translate(0, 1);
        if self.board.is_valid_placement(&candidate) {
            self.active = Some(candidate);
            return Descent::Moved;
        }

        self.board.lock(&active);
        let cleared = self.board.clear_full_rows();
        self.lines_cleared += cleared as u32;
        debug!(
            "locked {} at ({}, {}), cleared {} row(s)",
            active.kind.as_str(),
            active.x,
            active.y,
            cleared
        );

        if self.spawn_piece() {
            Descent::Locked { cleared }
        } else {
            Descent::GameOver { cleared }
        }
    }

    /// Spawn a random piece centered at the top.
    ///
    /// If it overlaps the board the game is over and no piece is active.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.choose_kind();
        let piece = Piece::spawn(kind, self.board.width());

        if !self.board.is_valid_placement(&piece) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} piece(s), {} row(s) cleared",
                self.pieces_spawned, self.lines_cleared
            );
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned += 1;
        true
    }

    /// Discard the board and piece and start over
    pub fn restart(&mut self) {
        info!("restarting");
        self.board.clear();
        self.active = None;
        self.status = GameStatus::Running;
        self.drop_timer_ms = 0;
        self.pieces_spawned = 0;
        self.lines_cleared = 0;
        self.spawn_piece();
    }

    /// Try to move the active piece; commits only a valid candidate
    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_commit(active.translate(dx, dy))
    }

    /// Try to rotate the active piece; no wall kicks
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_commit(active.rotate())
    }

    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.board.is_valid_placement(&candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Copy the render state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.status = self.status;
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(|piece| piece.cells()).unwrap_or_default();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn small_game() -> Game {
        Game::new(
            GameConfig {
                board_width: 6,
                board_height: 8,
                descent_interval_ms: 100,
            },
            42,
        )
    }

    #[test]
    fn new_game_is_running_with_piece_at_top() {
        let game = small_game();
        assert_eq!(game.status(), GameStatus::Running);
        let piece = game.active().unwrap();
        assert_eq!(piece.y, 0);
        assert_eq!(game.pieces_spawned(), 1);
    }

    #[test]
    fn tick_accumulates_until_interval() {
        let mut game = small_game();
        assert_eq!(game.tick(40), None);
        assert_eq!(game.tick(40), None);
        assert_eq!(game.drop_timer_ms(), 80);
        assert_eq!(game.tick(20), Some(Descent::Moved));
        assert_eq!(game.drop_timer_ms(), 0);
        assert_eq!(game.active().unwrap().y, 1);
    }

    #[test]
    fn tick_ignored_while_paused() {
        let mut game = small_game();
        game.tick(60);
        game.apply_action(GameAction::Pause);
        assert_eq!(game.tick(1_000), None);
        assert_eq!(game.drop_timer_ms(), 60);
        game.apply_action(GameAction::Pause);
        assert_eq!(game.tick(40), Some(Descent::Moved));
    }

    #[test]
    fn restart_only_from_overlay_states() {
        let mut game = small_game();
        assert!(!game.apply_action(GameAction::Restart));
        game.apply_action(GameAction::Pause);
        assert!(game.apply_action(GameAction::Restart));
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn step_down_locks_on_floor() {
        let mut game = small_game();
        game.board_mut().clear();
        let height = game.board().height() as usize;
        let mut locked = false;
        for _ in 0..=height {
            if let Descent::Locked { .. } = game.step_down() {
                locked = true;
                break;
            }
        }
        assert!(locked);
        assert_eq!(game.board().occupied_count(), 4);
        assert_eq!(game.pieces_spawned(), 2);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let game = small_game();
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!((snap.width, snap.height), (6, 8));
        assert_eq!(snap.board.len(), 48);
        assert_eq!(snap.active.len(), 4);
    }

    #[test]
    fn spawn_blocked_ends_game() {
        let mut game = small_game();
        for x in 1..6 {
            game.board_mut().set(x, 0, true);
        }
        assert!(!game.spawn_piece());
        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(game.active().is_none());
        assert_eq!(game.tick(1_000), None);
        assert!(!game.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn piece_kinds_come_from_catalog() {
        let mut game = small_game();
        for _ in 0..20 {
            game.restart();
            let kind = game.active().unwrap().kind;
            assert!(PieceKind::ALL.contains(&kind));
        }
    }
}
