//! Game-over invariant: the flag agrees with the board.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: `game_over` iff there is a winner or the board is full, there
/// is a winner iff some cell is flagged as won, and a finished game without a
/// winner is a draw.
pub struct GameOverInvariant;

impl Invariant<GameState> for GameOverInvariant {
    fn holds(state: &GameState) -> bool {
        let full = rules::is_full(state.board());
        let any_won = state.board().cells().iter().any(|cell| cell.won());
        let expected_over = state.winner().is_some() || full;

        let drawn = state.is_game_over() && state.winner().is_none();

        state.is_game_over() == expected_over
            && state.winner().is_some() == any_won
            && drawn == rules::is_draw(state.board())
    }

    fn description() -> &'static str {
        "Game over exactly when won or full"
    }
}
