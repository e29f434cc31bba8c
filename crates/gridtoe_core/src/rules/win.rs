//! Win detection for the line through the cell just played.
//!
//! Lines are checked in [`LineKind`] order (vertical, horizontal, diagonal,
//! inverted diagonal) and the first complete one is reported. A placement
//! that completes two lines at once only reports the first.

use super::super::{Board, Coord, LineKind, Marker};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// A completed line: its kind and its cells in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    kind: LineKind,
    cells: Vec<Coord>,
}

impl WinLine {
    /// Kind of line completed.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cells on the line, scanned from row 0 down.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// Whether a line of `kind` runs through `(row, col)`.
fn passes_through(kind: LineKind, row: usize, col: usize, size: usize) -> bool {
    match kind {
        LineKind::Vertical | LineKind::Horizontal => true,
        LineKind::Diagonal => row == col,
        LineKind::InvertedDiagonal => row + col + 1 == size,
    }
}

/// Cells of the line of `kind` through `(row, col)`.
fn line_cells(kind: LineKind, row: usize, col: usize, size: usize) -> Vec<Coord> {
    (0..size)
        .map(|i| match kind {
            LineKind::Vertical => Coord::new(i, col),
            LineKind::Horizontal => Coord::new(row, i),
            LineKind::Diagonal => Coord::new(i, i),
            LineKind::InvertedDiagonal => Coord::new(i, size - 1 - i),
        })
        .collect()
}

/// Checks whether placing `marker` at `(row, col)` completed a line.
///
/// Every cell of a candidate line must hold `marker`; partial lines never
/// count, whatever the board size.
#[instrument(skip(board), fields(size = board.size()))]
pub fn detect_win(board: &Board, marker: Marker, row: usize, col: usize) -> Option<WinLine> {
    let size = board.size();
    LineKind::iter()
        .filter(|kind| passes_through(*kind, row, col, size))
        .find_map(|kind| {
            let cells = line_cells(kind, row, col, size);
            let complete = cells
                .iter()
                .all(|at| board.marker_at(at.row, at.col) == Some(marker));
            trace!(%kind, complete, "Checked line");
            complete.then_some(WinLine { kind, cells })
        })
}
