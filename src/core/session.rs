//! # Game Session
//!
//! All state for one running game in a single object: board, selection,
//! score, best score and win target. The presentation layer owns the
//! session and drives it through explicit operations; there are no
//! process-wide singletons.
//!
//! A full turn is move -> spawn -> terminal check, and every operation
//! completes synchronously before the next input event is looked at.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::board::{Board, Coord, SizeError};
use crate::core::move_engine::{self, Direction};

/// Win target used when nothing else is configured.
pub const DEFAULT_TARGET: u32 = 2048;

/// Terminal-condition status, re-derived after every applied move.
///
/// `Won` is informational: play continues past the target, and the status
/// stays `Won` for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What one call to [`GameSession::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: bool,
    pub gained: u32,
    pub status: GameStatus,
}

pub struct GameSession {
    board: Board,
    selection: Option<Coord>,
    score: u32,
    best_score: u32,
    target: u32,
    rng: SmallRng,
}

impl GameSession {
    /// A fresh session: an empty board of the given size with two spawned
    /// tiles. `seed` makes the tile spawner deterministic; `None` seeds it
    /// from entropy.
    pub fn new(size: usize, target: u32, seed: Option<u64>) -> Result<Self, SizeError> {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut session = Self {
            board: Board::new(size)?,
            selection: None,
            score: 0,
            best_score: 0,
            target,
            rng,
        };
        session.spawn_initial_tiles();
        Ok(session)
    }

    fn spawn_initial_tiles(&mut self) {
        self.board.spawn_random_tile(&mut self.rng);
        self.board.spawn_random_tile(&mut self.rng);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Start over on a board of the same size. The best score survives for
    /// the lifetime of the process.
    pub fn restart(&mut self) {
        info!("Restarting game (size {})", self.size());
        self.board.clear();
        self.score = 0;
        self.selection = None;
        self.spawn_initial_tiles();
    }

    /// Replace the board with a fresh one of the given size and restart.
    ///
    /// An out-of-range size is rejected with the validation error and the
    /// session is left exactly as it was: no reset, no cleared selection.
    pub fn resize(&mut self, size: usize) -> Result<(), SizeError> {
        let board = Board::new(size)?;
        info!("Board size changed to {}", size);
        self.board = board;
        self.score = 0;
        self.selection = None;
        self.spawn_initial_tiles();
        Ok(())
    }

    /// Select the tile at `coord`. Selecting an empty cell clears the
    /// selection. The coordinate must lie on the board.
    pub fn select(&mut self, coord: Coord) {
        if self.board.get(coord) == 0 {
            self.selection = None;
        } else {
            self.selection = Some(coord);
        }
    }

    /// One full turn: slide the selected tile, and on movement credit the
    /// score, spawn a random tile and adopt the tile's new position as the
    /// selection. A move that does not change the board leaves everything
    /// untouched. Either way the current terminal status is reported.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let outcome = move_engine::move_selected(&mut self.board, self.selection, direction);
        self.selection = outcome.selection;
        if outcome.moved {
            self.score += outcome.gained;
            self.best_score = self.best_score.max(self.score);
            self.board.spawn_random_tile(&mut self.rng);
            debug!(
                "Moved {:?}: gained {}, score {}, selection {:?}",
                direction, outcome.gained, self.score, self.selection
            );
        }
        MoveReport {
            moved: outcome.moved,
            gained: outcome.gained,
            status: self.status(),
        }
    }

    /// Win first, then mobility: a board past the target reports `Won` even
    /// when no move is left.
    pub fn status(&self) -> GameStatus {
        if self.board.reached_target(self.target) {
            GameStatus::Won
        } else if !self.board.has_empty_cell() && !self.board.has_adjacent_equal_pair() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.selection = None;
        self.board = board;
    }
}
