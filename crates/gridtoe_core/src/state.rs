//! Immutable game state snapshots.
//!
//! A `GameState` is never mutated once built; every accepted move yields a
//! new one, which is what lets [`History`](crate::History) keep every past
//! snapshot without aliasing.

use super::engine;
use super::error::{MoveError, SizeError};
use super::outcome::Outcome;
use super::types::{Board, BoardLimits, Coord, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete state of one game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Marker,
    pub(crate) move_count: usize,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Marker>,
}

impl GameState {
    /// Fresh game on an empty `size`×`size` board within the default limits.
    pub fn new(size: usize) -> Result<Self, SizeError> {
        Self::new_within(size, BoardLimits::default())
    }

    /// Fresh game on an empty board, validating `size` against `limits`.
    ///
    /// Each call builds an independently owned state; there is no shared
    /// initial template.
    #[instrument]
    pub fn new_within(size: usize, limits: BoardLimits) -> Result<Self, SizeError> {
        Ok(Self::from_board(Board::empty_within(size, limits)?))
    }

    /// Starts a game on an empty board. O moves first.
    pub(crate) fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: Marker::O,
            move_count: 0,
            game_over: false,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker placed by the next accepted move; once the game is over, the
    /// marker that played last.
    pub fn turn(&self) -> Marker {
        self.turn
    }

    /// Number of markers on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// True once a line is completed or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player who completed a line, if any.
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Outcome of a finished game; `None` while still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.game_over, self.winner) {
            (false, _) => None,
            (true, Some(marker)) => Some(Outcome::Winner(marker)),
            (true, None) => Some(Outcome::Draw),
        }
    }

    /// Cells on the winning line, in row-major order.
    pub fn winning_cells(&self) -> Vec<Coord> {
        self.board
            .iter()
            .filter(|(_, cell)| cell.won())
            .map(|(at, _)| at)
            .collect()
    }

    /// Plays the current turn at `(row, col)`, returning the next state.
    ///
    /// See [`engine::apply_move`].
    pub fn play(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        engine::apply_move(self, row, col)
    }
}
