use std::time::Duration;

use log::{debug, info, trace};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::core::{
    board::{Board, COLS, Cell, ROWS},
    piece::Piece,
    shape::{Color, ShapeKind},
};

use super::game_stats::GameStats;

/// Time between automatic one-row descents.
pub const FALL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Owns the board and the falling piece and applies every game transition.
///
/// All operations run to completion synchronously. Input operations
/// (`move_*`, `soft_drop`, `rotate`) do nothing once the game is over;
/// only [`reset`](Self::reset) leaves that state.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::{FALL_INTERVAL, GameController};
///
/// let mut game = GameController::with_seed(42);
/// let y = game.active_piece().position().y();
///
/// game.tick(Duration::from_millis(200));
/// assert_eq!(game.active_piece().position().y(), y);
///
/// game.tick(FALL_INTERVAL);
/// assert_eq!(game.active_piece().position().y(), y + 1);
/// assert_eq!(game.score(), 0);
/// assert!(!game.is_game_over());
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    piece: Piece,
    state: GameState,
    stats: GameStats,
    fall_elapsed: Duration,
    rng: Pcg32,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Starts a game with a randomly seeded piece sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Starts a game whose piece sequence is determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let piece = Piece::spawn(rng.random());
        Self {
            board: Board::EMPTY,
            piece,
            state: GameState::Playing,
            stats: GameStats::new(),
            fall_elapsed: Duration::ZERO,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_cells(&self) -> &[[Cell; COLS]; ROWS] {
        self.board.rows()
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        &self.piece
    }

    pub fn active_piece_cells(&self) -> impl Iterator<Item = (i32, i32, Color)> + use<> {
        let color = self.piece.color();
        self.piece.occupied_cells().map(move |(x, y)| (x, y, color))
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Advances the fall timer by `elapsed`.
    ///
    /// Once the accumulated time reaches [`FALL_INTERVAL`] the piece drops one
    /// row (only while playing) and the accumulator restarts from zero. Any
    /// time beyond the interval is discarded.
    pub fn tick(&mut self, elapsed: Duration) {
        self.fall_elapsed = self.fall_elapsed.saturating_add(elapsed);
        if self.fall_elapsed < FALL_INTERVAL {
            return;
        }
        if self.state.is_playing() {
            self.try_move(0, 1);
        }
        self.fall_elapsed = Duration::ZERO;
    }

    pub fn move_left(&mut self) {
        self.try_move(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.try_move(1, 0);
    }

    pub fn soft_drop(&mut self) {
        self.try_move(0, 1);
    }

    /// Shifts the piece by (`dx`, `dy`) if that does not collide.
    ///
    /// A blocked downward move locks the piece. Other blocked moves are
    /// ignored.
    pub fn try_move(&mut self, dx: i32, dy: i32) {
        if self.state.is_game_over() {
            return;
        }
        if !self.board.collides(&self.piece, dx, dy) {
            self.piece.translate(dx, dy);
        } else if dy > 0 {
            self.lock_piece();
        }
    }

    /// Rotates the piece clockwise in place, or leaves it untouched if the
    /// rotated shape would collide. There are no wall kicks.
    pub fn rotate(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        let rotated = self.piece.rotated();
        if self.board.collides(&rotated, 0, 0) {
            trace!("rotation of {} rejected", self.piece.kind());
            return;
        }
        self.piece = rotated;
    }

    /// Starts over with an empty board and zero score. Only acts after game over.
    pub fn reset(&mut self) {
        if !self.state.is_game_over() {
            return;
        }
        info!("new game after final score {}", self.stats.score());
        self.board = Board::EMPTY;
        self.piece = self.spawn_next();
        self.stats = GameStats::new();
        self.state = GameState::Playing;
    }

    fn spawn_next(&mut self) -> Piece {
        let kind: ShapeKind = self.rng.random();
        Piece::spawn(kind)
    }

    fn lock_piece(&mut self) {
        self.board.freeze(&self.piece);
        let cleared_lines = self.board.clear_full_lines();
        self.stats.complete_piece_lock(cleared_lines);
        debug!(
            "locked {} at {:?}, cleared {cleared_lines} line(s), score {}",
            self.piece.kind(),
            self.piece.position(),
            self.stats.score()
        );

        self.piece = self.spawn_next();
        if self.board.collides(&self.piece, 0, 0) {
            self.state = GameState::GameOver;
            info!(
                "game over: {} cannot spawn, score {} after {} pieces",
                self.piece.kind(),
                self.stats.score(),
                self.stats.locked_pieces()
            );
        }
    }
}
