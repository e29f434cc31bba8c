//! Tests for the interactive session and replay.

use gridtoe::{Flow, GameController, Input, Session, replay};
use gridtoe_core::{Marker, MoveError, Outcome};
use std::io::Cursor;

fn run(script: &str) -> (GameController, String) {
    let game = GameController::with_size(3).unwrap();
    let mut output = Vec::new();
    let game = Session::new(game, Cursor::new(script.to_string()), &mut output)
        .run()
        .expect("Session should finish");
    (game, String::from_utf8(output).unwrap())
}

#[test]
fn test_full_game_from_script() {
    let (game, output) = run("0 0\n1 1\nm 0,1\nmove 2 2\n0 2\nquit\n");
    assert_eq!(game.view().outcome, Some(Outcome::Winner(Marker::O)));
    assert!(output.contains("Game over! Player O won!"));
    assert!(output.contains("0 [O]|[O]|[O]"));
}

#[test]
fn test_rejected_move_is_reported() {
    let (game, output) = run("1 1\n1 1\n");
    assert!(output.contains("Move ignored: Cell (1, 1) is already occupied"));
    assert_eq!(game.current().move_count(), 1);
    assert_eq!(game.current().turn(), Marker::X);
}

#[test]
fn test_undo_redo_commands() {
    let (game, output) = run("0 0\n1 1\nundo\nundo\nundo\nredo\n");
    assert!(output.contains("Cannot undo: No history in that direction"));
    assert_eq!(game.current().move_count(), 1);
    assert!(game.can_redo());
}

#[test]
fn test_resize_and_reset_commands() {
    let (game, output) = run("0 0\nresize 12\nresize 4\n3 3\nreset\n");
    assert!(output.contains("Cannot resize: Board size 12 is outside the allowed range 3..=9"));
    assert_eq!(game.size(), 4);
    assert_eq!(game.current().move_count(), 0);
    assert!(!game.can_undo());
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    let (game, output) = run("fly\n2 2\n");
    assert!(output.contains("Unknown command 'fly'"));
    assert_eq!(game.current().board().marker_at(2, 2), Some(Marker::O));
}

#[test]
fn test_json_command() {
    let (_, output) = run("0 0\njson\n");
    assert!(output.contains("\"can_undo\": true"));
    assert!(output.contains("\"turn\": \"X\""));
}

#[test]
fn test_execute_quit() {
    let game = GameController::with_size(3).unwrap();
    let mut output = Vec::new();
    let mut session = Session::new(game, Cursor::new(String::new()), &mut output);
    assert_eq!(session.execute(Input::Show).unwrap(), Flow::Continue);
    assert_eq!(session.execute(Input::Quit).unwrap(), Flow::Quit);
    assert_eq!(session.game().size(), 3);
}

#[test]
fn test_replay_skips_rejected_moves() {
    let mut game = GameController::with_size(3).unwrap();
    let skipped = replay(&mut game, &[(0, 0), (0, 0), (5, 5), (1, 1)]);

    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].index, 1);
    assert_eq!(skipped[0].error, MoveError::CellOccupied { row: 0, col: 0 });
    assert!(matches!(skipped[1].error, MoveError::OutOfBounds { .. }));
    assert_eq!(game.current().move_count(), 2);
}
