//! Draw detection.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell holds a marker.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board on which no line was completed.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !board.cells().iter().any(|cell| cell.won())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Coord, LineKind, Marker};
    use super::*;

    fn fill(board: &mut Board, rows: &[&str]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let marker = match ch {
                    'O' => Marker::O,
                    'X' => Marker::X,
                    _ => continue,
                };
                board.set(r, c, marker).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::empty(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::empty(4).unwrap();
        board.set(1, 1, Marker::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::empty(3).unwrap();
        fill(&mut board, &["OXO", "OXX", "XOO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_won() {
        let mut board = Board::empty(3).unwrap();
        fill(&mut board, &["OOO", "XXO", "XOX"]);
        for col in 0..3 {
            board.mark_won(Coord::new(0, col), LineKind::Horizontal);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
