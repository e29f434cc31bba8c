//! Gridtoe - resizable tic-tac-toe in the terminal.
//!
//! The game rules live in [`gridtoe_core`]; this crate is the text front
//! end around its [`GameController`].
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Input**: parsing of typed commands (`move 1 2`, `undo`, `resize 5`, ...)
//! - **Render**: plain-text board, status and history lines
//! - **Session**: read-execute-print loop over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use config::{ConfigError, Overrides, load_config, resolve};
pub use input::{Input, InputError, parse_coords};
pub use render::{render_board, render_history, render_status, render_view};
pub use session::{Flow, Session, SkippedMove, replay};

pub use gridtoe_core::{GameConfig, GameController, GameView};
