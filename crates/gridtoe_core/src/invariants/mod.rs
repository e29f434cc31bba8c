//! First-class invariants over [`GameState`](crate::GameState).
//!
//! Invariants are logical properties that must hold for every state the
//! move engine produces. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod game_over;
pub mod move_count;
pub mod won_cells;

pub use alternating_turn::AlternatingTurnInvariant;
pub use game_over::GameOverInvariant;
pub use move_count::MoveCountInvariant;
pub use won_cells::WonCellsInvariant;

/// All game state invariants as a composable set.
pub type GameInvariants = (
    MoveCountInvariant,
    GameOverInvariant,
    AlternatingTurnInvariant,
    WonCellsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Marker};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new(3).unwrap();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new(4).unwrap();
        for (r, c) in [(0, 0), (3, 3), (1, 2)] {
            state = state.play(r, c).unwrap();
        }
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new(3).unwrap().play(1, 1).unwrap();
        state.board.set(0, 0, Marker::O).unwrap();

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = GameState::new(3).unwrap();

        type TwoInvariants = (MoveCountInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
