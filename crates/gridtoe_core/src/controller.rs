//! Game controller: wires size selection and player input to the move
//! engine and history.
//!
//! The controller owns the history exclusively. Every request runs to
//! completion synchronously; callers that share a controller across
//! threads must serialize access to it (one lock per game).

use super::config::GameConfig;
use super::engine;
use super::error::{HistoryError, MoveError, SizeError};
use super::history::History;
use super::state::GameState;
use super::types::BoardLimits;
use super::view::GameView;
use tracing::{info, instrument, warn};

/// One game instance with its undo/redo history.
#[derive(Debug, Clone)]
pub struct GameController {
    limits: BoardLimits,
    history: History,
}

impl GameController {
    /// Creates a controller from `config`, starting an empty game of
    /// `config.initial_size()`.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] if the configured sizes are invalid.
    #[instrument(skip(config), fields(initial_size = config.initial_size(), max_size = config.max_size()))]
    pub fn new(config: &GameConfig) -> Result<Self, SizeError> {
        let limits = config.limits()?;
        let initial = GameState::new_within(*config.initial_size(), limits)?;
        info!("Game controller ready");
        Ok(Self {
            limits,
            history: History::with_limit(initial, *config.history_limit()),
        })
    }

    /// Creates a controller with default limits and a `size`×`size` board.
    pub fn with_size(size: usize) -> Result<Self, SizeError> {
        Self::new(&GameConfig::default().with_initial_size(size))
    }

    /// Starts over on an empty `size`×`size` board, discarding all history.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] and leaves the game untouched when
    /// `size` is outside the limits.
    #[instrument(skip(self), fields(current = self.size()))]
    pub fn request_resize(&mut self, size: usize) -> Result<(), SizeError> {
        let initial = GameState::new_within(size, self.limits).inspect_err(|e| {
            warn!(error = %e, "Resize rejected");
        })?;
        self.history.reset(initial);
        info!(size, "Board resized");
        Ok(())
    }

    /// Plays the current turn at `(row, col)` and records the new state.
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(turn = %self.current().turn()))]
    pub fn request_move(&mut self, row: usize, col: usize) -> Result<&GameState, MoveError> {
        let next = engine::apply_move(self.history.current(), row, col)?;
        self.history.push(next);
        Ok(self.history.current())
    }

    /// Starts over on an empty board of the current size, clearing history.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn request_reset(&mut self) {
        let initial = GameState::from_board(self.current().board().cleared());
        self.history.reset(initial);
        info!("Game reset");
    }

    /// Steps back one move.
    pub fn undo(&mut self) -> Result<&GameState, HistoryError> {
        self.history.undo()
    }

    /// Steps forward one move.
    pub fn redo(&mut self) -> Result<&GameState, HistoryError> {
        self.history.redo()
    }

    /// Jumps to history entry `index`.
    pub fn go_to(&mut self, index: usize) -> Result<&GameState, HistoryError> {
        self.history.go_to(index)
    }

    /// State at the history cursor.
    pub fn current(&self) -> &GameState {
        self.history.current()
    }

    /// Side length of the current board.
    pub fn size(&self) -> usize {
        self.current().board().size()
    }

    /// Size limits resize requests are checked against.
    pub fn limits(&self) -> BoardLimits {
        self.limits
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True when there is history to clear.
    pub fn can_reset(&self) -> bool {
        self.can_undo() || self.can_redo()
    }

    /// Snapshot of everything observable about the game.
    pub fn view(&self) -> GameView {
        let state = self.current().clone();
        GameView {
            size: state.board().size(),
            max_size: self.limits.max_size(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            can_reset: self.can_reset(),
            cursor: self.history.cursor(),
            history_len: self.history.entries().len(),
            history_limit: self.history.limit(),
            outcome: state.outcome(),
            winning_cells: state.winning_cells(),
            state,
        }
    }
}
