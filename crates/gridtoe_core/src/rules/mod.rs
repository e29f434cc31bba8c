//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the move engine and contracts can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, detect_win};
