//! Outcome of a finished game.

use super::Marker;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Marker),
    /// The board filled up with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(marker) => write!(f, "Player {} won!", marker),
            Outcome::Draw => write!(f, "Draw game."),
        }
    }
}
