//! Interactive play session over line-based input and output.

use crate::input::{HELP, Input};
use crate::render::render_view;
use anyhow::{Context, Result};
use gridtoe_core::{GameController, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the session.
    Quit,
}

/// A game driven by text commands.
///
/// Every command runs to completion before the next line is read.
pub struct Session<R, W> {
    game: GameController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing game.
    pub fn new(game: GameController, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Reads and executes commands until `quit` or end of input.
    ///
    /// Returns the game in its final state.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameController> {
        info!("Session started");
        write!(self.output, "{}", render_view(&self.game.view()))?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Input>() {
                Ok(input) => {
                    if self.execute(input)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!("Session ended");
        Ok(self.game)
    }

    /// Executes one command and writes its result.
    #[instrument(skip(self))]
    pub fn execute(&mut self, input: Input) -> Result<Flow> {
        let message = match input {
            Input::Move { row, col } => self
                .game
                .request_move(row, col)
                .err()
                .map(|e| format!("Move ignored: {}", e)),
            Input::Undo => self.game.undo().err().map(|e| format!("Cannot undo: {}", e)),
            Input::Redo => self.game.redo().err().map(|e| format!("Cannot redo: {}", e)),
            Input::Reset => {
                self.game.request_reset();
                None
            }
            Input::Resize(size) => self
                .game
                .request_resize(size)
                .err()
                .map(|e| format!("Cannot resize: {}", e)),
            Input::GoTo(index) => self
                .game
                .go_to(index)
                .err()
                .map(|e| format!("Cannot jump: {}", e)),
            Input::Show => None,
            Input::Json => {
                let json = serde_json::to_string_pretty(&self.game.view())?;
                writeln!(self.output, "{}", json)?;
                return Ok(Flow::Continue);
            }
            Input::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Input::Quit => return Ok(Flow::Quit),
        };

        if let Some(message) = message {
            writeln!(self.output, "{}", message)?;
        }
        write!(self.output, "{}", render_view(&self.game.view()))?;
        Ok(Flow::Continue)
    }
}

/// A move `replay` could not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMove {
    /// Position in the move list.
    pub index: usize,
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why it was rejected.
    pub error: MoveError,
}

/// Plays `moves` in order, skipping and reporting rejected ones.
#[instrument(skip(game, moves), fields(count = moves.len()))]
pub fn replay(game: &mut GameController, moves: &[(usize, usize)]) -> Vec<SkippedMove> {
    moves
        .iter()
        .enumerate()
        .filter_map(|(index, &(row, col))| {
            game.request_move(row, col).err().map(|error| {
                warn!(index, row, col, %error, "Skipping move");
                SkippedMove {
                    index,
                    row,
                    col,
                    error,
                }
            })
        })
        .collect()
}
