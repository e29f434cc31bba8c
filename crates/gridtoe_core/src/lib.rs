//! Pure N×N tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] of [`Cell`]s, sized 3×3 up to a configured maximum
//! - **Win detection**: [`detect_win`] checks the lines through the cell just played
//! - **Move engine**: [`apply_move`] validates a move and returns the next [`GameState`]
//! - **History**: [`History`] keeps every state with linear undo/redo
//! - **Controller**: [`GameController`] ties size selection, moves and history together
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{GameController, Marker};
//!
//! let mut game = GameController::with_size(3)?;
//! game.request_move(0, 0)?;
//! assert_eq!(game.current().turn(), Marker::X);
//!
//! game.undo()?;
//! assert!(game.can_redo());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod contracts;
mod controller;
mod engine;
mod error;
mod history;
mod invariants;
mod outcome;
mod rules;
mod state;
mod types;
mod view;

pub use config::GameConfig;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract};
pub use controller::GameController;
pub use engine::apply_move;
pub use error::{HistoryError, MoveError, SizeError};
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, GameOverInvariant, Invariant, InvariantSet,
    InvariantViolation, MoveCountInvariant, WonCellsInvariant,
};
pub use outcome::Outcome;
pub use rules::{WinLine, detect_win, is_draw, is_full};
pub use state::GameState;
pub use types::{
    Board, BoardLimits, Cell, Coord, DEFAULT_MAX_SIZE, LineKind, MIN_SIZE, Marker, SIZE_CEILING,
};
pub use view::GameView;
