//! Move engine: validates a move, applies it and evaluates the result.

use super::contracts::{Contract, MoveContract};
use super::error::MoveError;
use super::rules::detect_win;
use super::state::GameState;
use super::types::Coord;
use tracing::{debug, instrument};

/// Plays `state.turn()` at `(row, col)` and returns the next state.
///
/// `state` is left untouched; history bookkeeping belongs to the caller.
///
/// Contract enforcement:
/// - Preconditions checked always, in order: game not over, in bounds,
///   cell empty
/// - Postconditions checked in debug builds only
///
/// # Errors
///
/// Returns [`MoveError::GameAlreadyOver`], [`MoveError::OutOfBounds`] or
/// [`MoveError::CellOccupied`] when the move is rejected.
#[instrument(skip(state), fields(turn = %state.turn(), move_count = state.move_count()))]
pub fn apply_move(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    let at = Coord::new(row, col);
    MoveContract::pre(state, &at)?;

    let marker = state.turn;
    let mut board = state.board.clone();
    board.set(row, col, marker)?;
    let move_count = state.move_count + 1;

    let next = if let Some(line) = detect_win(&board, marker, row, col) {
        for cell in line.cells() {
            board.mark_won(*cell, line.kind());
        }
        debug!(winner = %marker, line = %line.kind(), "Move completed a line");
        GameState {
            board,
            turn: marker,
            move_count,
            game_over: true,
            winner: Some(marker),
        }
    } else if move_count == board.size() * board.size() {
        debug!("Board full, game drawn");
        GameState {
            board,
            turn: marker,
            move_count,
            game_over: true,
            winner: None,
        }
    } else {
        GameState {
            board,
            turn: marker.opponent(),
            move_count,
            game_over: false,
            winner: None,
        }
    };

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineKind, Marker};

    #[test]
    fn test_turn_alternates() {
        let state = GameState::new(3).unwrap();
        let state = apply_move(&state, 0, 0).unwrap();
        assert_eq!(state.turn(), Marker::X);
        let state = apply_move(&state, 1, 1).unwrap();
        assert_eq!(state.turn(), Marker::O);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_rejection_order() {
        let state = GameState::new(3).unwrap();
        let state = apply_move(&state, 0, 0).unwrap();
        assert_eq!(
            apply_move(&state, 0, 0),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            apply_move(&state, 0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3, size: 3 })
        );
    }

    #[test]
    fn test_win_marks_cells() {
        let mut state = GameState::new(3).unwrap();
        for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            state = apply_move(&state, r, c).unwrap();
        }
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Marker::O));
        assert_eq!(state.turn(), Marker::O);
        assert_eq!(state.move_count(), 5);
        for i in 0..3 {
            let cell = state.board().get(i, i).unwrap();
            assert!(cell.won());
            assert_eq!(cell.line(), Some(LineKind::Diagonal));
        }
        assert!(!state.board().get(1, 0).unwrap().won());
    }

    #[test]
    fn test_no_move_after_game_over() {
        let mut state = GameState::new(3).unwrap();
        for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            state = apply_move(&state, r, c).unwrap();
        }
        // Even an out-of-bounds move reports the game being over first.
        assert_eq!(apply_move(&state, 9, 9), Err(MoveError::GameAlreadyOver));
        assert_eq!(apply_move(&state, 0, 1), Err(MoveError::GameAlreadyOver));
    }
}
