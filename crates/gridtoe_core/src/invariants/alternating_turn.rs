//! Alternating turn invariant: O, X, O, X, ...

use super::super::{GameState, Marker};
use super::Invariant;

/// Invariant: players alternate, O first.
///
/// O has placed as many markers as X, or one more. While the game is in
/// progress `turn` is the marker due next; once over it is the marker
/// that played last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let o = state.board().count(Marker::O);
        let x = state.board().count(Marker::X);

        let (next, last) = if o == x {
            (Marker::O, Marker::X)
        } else if o == x + 1 {
            (Marker::X, Marker::O)
        } else {
            return false;
        };

        if state.is_game_over() {
            state.move_count() > 0 && state.turn() == last
        } else {
            state.turn() == next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let state = GameState::new(3).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut state = GameState::new(5).unwrap();
        for (r, c) in [(0, 0), (4, 4), (2, 2), (1, 3)] {
            state = state.play(r, c).unwrap();
            assert!(AlternatingTurnInvariant::holds(&state));
        }
    }

    #[test]
    fn test_holds_after_win() {
        let mut state = GameState::new(3).unwrap();
        for (r, c) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            state = state.play(r, c).unwrap();
        }
        assert_eq!(state.turn(), Marker::O);
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_double_move_violates() {
        let mut state = GameState::new(3).unwrap().play(0, 0).unwrap();
        state.board.set(2, 2, Marker::O).unwrap();
        state.move_count += 1;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut state = GameState::new(3).unwrap().play(0, 0).unwrap();
        state.turn = Marker::O;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
