//! Parsing of typed player commands.

use std::str::FromStr;
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current marker.
    Move {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Clear the board and history.
    Reset,
    /// Start over on a new board size.
    Resize(usize),
    /// Jump to a history entry.
    GoTo(usize),
    /// Print the board again.
    Show,
    /// Print the current view as JSON.
    Json,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Command list shown by `help`.
pub const HELP: &str = "\
Commands:
  move R C   place a marker (aliases: m R C, R C, R,C)
  undo | u   step back one move
  redo | r   step forward one move
  reset      clear the board and history
  resize N   start a new N x N game
  goto I     jump to history entry I
  show       print the board
  json       print the game as JSON
  help       show this list
  quit | q   leave";

/// Error parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(String),

    /// Wrong number of arguments.
    #[display("'{}' expects {} argument(s)", command, expected)]
    Arity {
        /// Command name.
        command: &'static str,
        /// Number of arguments expected.
        expected: usize,
    },

    /// An argument is not a non-negative integer.
    #[display("'{}' is not a valid number", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

fn number(s: &str) -> Result<usize, InputError> {
    s.parse()
        .map_err(|_| InputError::NotANumber(s.to_string()))
}

fn args(rest: &[&str], command: &'static str, expected: usize) -> Result<Vec<usize>, InputError> {
    if rest.len() != expected {
        return Err(InputError::Arity { command, expected });
    }
    rest.iter().map(|s| number(s)).collect()
}

/// Parses a `R,C` or `R C` coordinate pair.
#[instrument]
pub fn parse_coords(s: &str) -> Result<(usize, usize), InputError> {
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match args(&parts, "move", 2)?.as_slice() {
        [row, col] => Ok((*row, *col)),
        _ => Err(InputError::Arity {
            command: "move",
            expected: 2,
        }),
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((first, rest)) = words.split_first() else {
            return Err(InputError::Empty);
        };

        if first.starts_with(|c: char| c.is_ascii_digit()) {
            let (row, col) = parse_coords(line)?;
            return Ok(Input::Move { row, col });
        }

        let input = match first.to_lowercase().as_str() {
            "move" | "m" => {
                let (row, col) = parse_coords(&rest.join(" "))?;
                Input::Move { row, col }
            }
            "undo" | "u" => Input::Undo,
            "redo" | "r" => Input::Redo,
            "reset" => Input::Reset,
            "resize" => Input::Resize(args(rest, "resize", 1)?[0]),
            "goto" => Input::GoTo(args(rest, "goto", 1)?[0]),
            "show" => Input::Show,
            "json" => Input::Json,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            other => return Err(InputError::Unknown(other.to_string())),
        };
        Ok(input)
    }
}
