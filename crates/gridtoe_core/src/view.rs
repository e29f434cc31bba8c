//! Read-only snapshot handed to the rendering layer.

use super::outcome::Outcome;
use super::state::GameState;
use super::types::Coord;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// State at the history cursor.
    pub state: GameState,
    /// Side length of the board.
    pub size: usize,
    /// Largest size a resize will accept.
    pub max_size: usize,
    /// An undo step is available.
    pub can_undo: bool,
    /// A redo step is available.
    pub can_redo: bool,
    /// There is any history to clear.
    pub can_reset: bool,
    /// Index of the current history entry.
    pub cursor: usize,
    /// Number of history entries.
    pub history_len: usize,
    /// Most entries the history keeps, if bounded.
    pub history_limit: Option<usize>,
    /// Outcome once the game is over.
    pub outcome: Option<Outcome>,
    /// Cells of the winning line.
    pub winning_cells: Vec<Coord>,
}
