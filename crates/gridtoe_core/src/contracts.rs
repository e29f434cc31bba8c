//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::types::Coord;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a finished game.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_game_over() {
            warn!("Move rejected: game is over");
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside `[0, N)`.
    #[instrument(skip(state))]
    pub fn check(at: &Coord, state: &GameState) -> Result<(), MoveError> {
        let size = state.board().size();
        if state.board().contains(at.row, at.col) {
            Ok(())
        } else {
            warn!(size, "Move rejected: out of bounds");
            Err(MoveError::OutOfBounds {
                row: at.row,
                col: at.col,
                size,
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(state))]
    pub fn check(at: &Coord, state: &GameState) -> Result<(), MoveError> {
        if state.board().marker_at(at.row, at.col).is_some() {
            warn!("Move rejected: cell occupied");
            Err(MoveError::CellOccupied {
                row: at.row,
                col: at.col,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: not over, in bounds, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(at: &Coord, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        InBounds::check(at, state)?;
        CellIsEmpty::check(at, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Exactly one more marker on the board
/// - Earlier markers are untouched
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Coord> for MoveContract {
    fn pre(state: &GameState, at: &Coord) -> Result<(), MoveError> {
        LegalMove::check(at, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.move_count() != before.move_count() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: move count went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        let overwritten = before.board().iter().any(|(at, cell)| {
            cell.marker().is_some() && after.board().marker_at(at.row, at.col) != cell.marker()
        });
        if overwritten {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: an earlier marker changed".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new(3).unwrap();
        assert!(MoveContract::pre(&state, &Coord::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::new(3).unwrap().play(1, 1).unwrap();
        assert!(matches!(
            MoveContract::pre(&state, &Coord::new(1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let state = GameState::new(3).unwrap();
        assert!(matches!(
            MoveContract::pre(&state, &Coord::new(5, 0)),
            Err(MoveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new(3).unwrap();
        let after = before.play(0, 2).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new(3).unwrap();
        let mut after = before.play(0, 2).unwrap();
        after.board.set(2, 2, Marker::O).unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = GameState::new(3).unwrap().play(0, 0).unwrap();
        let mut after = before.play(1, 1).unwrap();
        after.board.set(0, 0, Marker::X).unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
