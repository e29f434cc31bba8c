//! Core domain types for N×N tic-tac-toe.

use super::error::{MoveError, SizeError};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Smallest playable board size.
pub const MIN_SIZE: usize = 3;

/// Largest board size allowed unless configured otherwise.
pub const DEFAULT_MAX_SIZE: usize = 9;

/// Hard ceiling on any configured maximum size.
pub const SIZE_CEILING: usize = 255;

/// Marker placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Marker {
    /// Player O (moves first).
    O,
    /// Player X.
    X,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::O => Marker::X,
            Marker::X => Marker::O,
        }
    }
}

/// Kind of line a win was completed on.
///
/// Declaration order is the order lines are checked in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineKind {
    /// A full column.
    Vertical,
    /// A full row.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    InvertedDiagonal,
}

/// A `(row, col)` coordinate on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single square of the board.
///
/// `won` and `line` are only ever set on the cells of a completed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    marker: Option<Marker>,
    won: bool,
    line: Option<LineKind>,
}

impl Cell {
    /// Marker occupying this cell, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// True when no marker has been placed here.
    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }

    /// True when this cell is part of the winning line.
    pub fn won(&self) -> bool {
        self.won
    }

    /// The winning line this cell belongs to.
    pub fn line(&self) -> Option<LineKind> {
        self.line
    }
}

/// Allowed range of board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLimits {
    max_size: usize,
}

impl BoardLimits {
    /// Creates limits with the given maximum; the minimum is always [`MIN_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::InvalidLimit`] unless `max_size` is within
    /// `MIN_SIZE..=SIZE_CEILING`.
    #[instrument]
    pub fn new(max_size: usize) -> Result<Self, SizeError> {
        if !(MIN_SIZE..=SIZE_CEILING).contains(&max_size) {
            return Err(SizeError::InvalidLimit { max: max_size });
        }
        Ok(Self { max_size })
    }

    /// Smallest allowed size.
    pub fn min_size(&self) -> usize {
        MIN_SIZE
    }

    /// Largest allowed size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Checks that `size` is within these limits.
    pub fn check(&self, size: usize) -> Result<(), SizeError> {
        if (MIN_SIZE..=self.max_size).contains(&size) {
            Ok(())
        } else {
            Err(SizeError::OutOfRange {
                size,
                min: MIN_SIZE,
                max: self.max_size,
            })
        }
    }
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// N×N board, cells stored in row-major order.
///
/// The size is fixed for the lifetime of a board; resizing builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board within the default limits.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] if `size` is below 3 or above 9.
    pub fn empty(size: usize) -> Result<Self, SizeError> {
        Self::empty_within(size, BoardLimits::default())
    }

    /// Creates an empty board, validating `size` against `limits`.
    #[instrument]
    pub fn empty_within(size: usize, limits: BoardLimits) -> Result<Self, SizeError> {
        limits.check(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True when `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.size + col)
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Marker at `(row, col)`; `None` when empty or off the board.
    pub fn marker_at(&self, row: usize, col: usize) -> Option<Marker> {
        self.get(row, col).and_then(|cell| cell.marker())
    }

    /// Places `marker` at `(row, col)`, overwriting whatever was there.
    ///
    /// Occupancy is a move rule, not a board rule; see [`crate::apply_move`].
    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), MoveError> {
        let size = self.size;
        let i = self
            .index(row, col)
            .ok_or(MoveError::OutOfBounds { row, col, size })?;
        self.cells[i].marker = Some(marker);
        Ok(())
    }

    /// Empty board of the same size.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Cell::default(); self.size * self.size],
        }
    }

    /// Flags a cell as part of the winning line.
    pub(crate) fn mark_won(&mut self, at: Coord, line: LineKind) {
        if let Some(i) = self.index(at.row, at.col) {
            let cell = &mut self.cells[i];
            cell.won = true;
            cell.line = Some(line);
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Iterates over every cell with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / size, i % size), cell))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = SizeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if !(MIN_SIZE..=SIZE_CEILING).contains(&raw.size) {
            return Err(SizeError::OutOfRange {
                size: raw.size,
                min: MIN_SIZE,
                max: SIZE_CEILING,
            });
        }
        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(SizeError::CellCount {
                size: raw.size,
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|cell| cell.marker().map_or(".".to_string(), |m| m.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_every_size() {
        for size in MIN_SIZE..=DEFAULT_MAX_SIZE {
            let board = Board::empty(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.rows().count(), size);
            assert!(board.rows().all(|row| row.len() == size));
            assert!(board.cells().iter().all(|c| *c == Cell::default()));
            assert_eq!(board.occupied_count(), 0);
        }
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(matches!(
            Board::empty(2),
            Err(SizeError::OutOfRange { size: 2, .. })
        ));
        assert!(matches!(
            Board::empty(10),
            Err(SizeError::OutOfRange { size: 10, max: 9, .. })
        ));
    }

    #[test]
    fn test_custom_limit() {
        let limits = BoardLimits::new(12).unwrap();
        assert_eq!(Board::empty_within(12, limits).unwrap().size(), 12);
        assert!(BoardLimits::new(2).is_err());
    }

    #[test]
    fn test_limit_above_ceiling_rejected() {
        assert!(BoardLimits::new(SIZE_CEILING).is_ok());
        assert_eq!(
            BoardLimits::new(SIZE_CEILING + 1),
            Err(SizeError::InvalidLimit { max: SIZE_CEILING + 1 })
        );
        assert_eq!(
            BoardLimits::new((1 << 32) + 1),
            Err(SizeError::InvalidLimit { max: (1 << 32) + 1 })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::empty(3).unwrap();
        let copy = original.clone();
        original.set(1, 1, Marker::X).unwrap();
        assert_eq!(original.marker_at(1, 1), Some(Marker::X));
        assert_eq!(copy.marker_at(1, 1), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::empty(3).unwrap();
        assert_eq!(
            board.set(3, 0, Marker::O),
            Err(MoveError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
    }

    #[test]
    fn test_decode_checks_shape() {
        let board = Board::empty(3).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":3,"cells":[]}"#).is_err());
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty(3).unwrap();
        board.set(0, 0, Marker::O).unwrap();
        board.set(2, 1, Marker::X).unwrap();
        assert_eq!(board.to_string(), "O . .\n. . .\n. X .");
    }
}
