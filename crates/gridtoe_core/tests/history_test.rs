//! Tests for linear undo/redo history.

use gridtoe_core::{GameState, History, HistoryError};

fn three_states() -> [GameState; 3] {
    let s0 = GameState::new(3).unwrap();
    let s1 = s0.play(0, 0).unwrap();
    let s2 = s1.play(1, 1).unwrap();
    [s0, s1, s2]
}

#[test]
fn test_push_after_undo_prunes_redo_branch() {
    let [s0, s1, s2] = three_states();
    let mut history = History::new(s0.clone());
    history.push(s1.clone());
    history.push(s2);

    assert_eq!(history.undo().unwrap(), &s1);

    let s3 = s1.play(2, 2).unwrap();
    history.push(s3.clone());
    assert_eq!(history.entries(), &[s0, s1, s3.clone()]);
    assert_eq!(history.current(), &s3);
    assert!(!history.can_redo());
    assert_eq!(history.redo(), Err(HistoryError::NoHistory));
    assert_eq!(history.current(), &s3);
}

#[test]
fn test_undo_then_redo_returns_to_same_state() {
    let [s0, s1, s2] = three_states();
    let mut history = History::new(s0.clone());
    history.push(s1);
    history.push(s2.clone());

    history.undo().unwrap();
    history.undo().unwrap();
    assert_eq!(history.current(), &s0);
    assert!(!history.can_undo());

    history.redo().unwrap();
    assert_eq!(history.redo().unwrap(), &s2);
    assert_eq!(history.cursor(), 2);
}

#[test]
fn test_cursor_stays_valid() {
    let [s0, s1, s2] = three_states();
    let mut history = History::with_limit(s0, Some(2));
    history.push(s1);
    history.push(s2);
    for _ in 0..5 {
        let _ = history.undo();
        assert!(history.cursor() < history.entries().len());
    }
    for _ in 0..5 {
        let _ = history.redo();
        assert!(history.cursor() < history.entries().len());
    }
}
