//! Plain-text rendering of the board and game status.

use gridtoe_core::{Board, Cell, GameView, Outcome};
use tracing::instrument;

fn render_cell(cell: &Cell) -> String {
    match (cell.marker(), cell.won()) {
        (None, _) => " . ".to_string(),
        (Some(marker), false) => format!(" {} ", marker),
        (Some(marker), true) => format!("[{}]", marker),
    }
}

/// Renders the board with row and column indices.
///
/// Cells on the winning line are bracketed, e.g. `[O]`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn render_board(board: &Board) -> String {
    let width = (board.size() - 1).to_string().len();
    let pad = " ".repeat(width + 1);

    let header = (0..board.size())
        .map(|col| format!("{:^3}", col))
        .collect::<Vec<_>>()
        .join(" ");
    let separator = vec!["---"; board.size()].join("+");

    let mut out = format!("{}{}\n", pad, header);
    for (r, row) in board.rows().enumerate() {
        if r > 0 {
            out.push_str(&format!("{}{}\n", pad, separator));
        }
        let cells = row.iter().map(render_cell).collect::<Vec<_>>().join("|");
        out.push_str(&format!("{:>width$} {}\n", r, cells, width = width));
    }
    out
}

/// Renders the one-line game status.
pub fn render_status(view: &GameView) -> String {
    match view.outcome {
        Some(outcome @ Outcome::Winner(_)) => format!("Game over! {}", outcome),
        Some(Outcome::Draw) => format!("Game over! {}", Outcome::Draw),
        None => format!("Current turn: {}", view.state.turn()),
    }
}

/// Renders the history line: position and available travel.
pub fn render_history(view: &GameView) -> String {
    let flag = |on: bool| if on { "yes" } else { "no" };
    let bound = view
        .history_limit
        .map_or(String::new(), |limit| format!(" (max {})", limit));
    format!(
        "History {}/{}{}  undo: {}  redo: {}",
        view.cursor + 1,
        view.history_len,
        bound,
        flag(view.can_undo),
        flag(view.can_redo)
    )
}

/// Renders board, status and history together.
pub fn render_view(view: &GameView) -> String {
    format!(
        "{}{}\n{}\n",
        render_board(view.state.board()),
        render_status(view),
        render_history(view)
    )
}
