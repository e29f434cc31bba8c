//! Error types for board sizing, moves and history travel.
//!
//! None of these are fatal: the game stays playable after any of them.

use derive_more::Display;

/// A requested board size (or size limit) is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SizeError {
    /// Size falls outside `[min, max]`.
    #[display("Board size {size} is outside the allowed range {min}..={max}")]
    OutOfRange {
        /// Requested size.
        size: usize,
        /// Smallest allowed size.
        min: usize,
        /// Largest allowed size.
        max: usize,
    },

    /// Configured maximum is below the playable minimum or above the ceiling.
    #[display("Maximum board size {max} is outside the supported range 3..=255")]
    InvalidLimit {
        /// Configured maximum.
        max: usize,
    },

    /// A decoded board does not hold `size * size` cells.
    #[display("Board of size {size} needs {expected} cells, found {actual}")]
    CellCount {
        /// Declared size.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Cells actually present.
        actual: usize,
    },
}

impl std::error::Error for SizeError {}

/// A move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game already has a winner or the board is full.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Coordinates are off the board.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Nothing to travel to in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryError {
    /// Undo at the first entry, or redo at the last.
    #[display("No history in that direction")]
    NoHistory,

    /// Jump target does not exist.
    #[display("History index {index} is out of range (length {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
