//! Won cells invariant: highlighted cells belong to the winner.

use super::super::GameState;
use super::Invariant;

/// Invariant: every cell flagged as won holds the winner's marker, carries
/// a line kind, and all flagged cells share that line kind.
pub struct WonCellsInvariant;

impl Invariant<GameState> for WonCellsInvariant {
    fn holds(state: &GameState) -> bool {
        let mut won = state.board().cells().iter().filter(|cell| cell.won());
        let Some(first) = won.next() else {
            return true;
        };
        let line = first.line();

        line.is_some()
            && state.winner().is_some()
            && std::iter::once(first)
                .chain(won)
                .all(|cell| cell.marker() == state.winner() && cell.line() == line)
    }

    fn description() -> &'static str {
        "Won cells hold the winner's marker on a single line"
    }
}
