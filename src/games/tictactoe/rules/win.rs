//! Win detection logic.

use super::super::{Board, Marker, Outcome, Square};
use super::LineTable;
use tracing::{debug, instrument};

/// Checks if there is a winner on the board.
///
/// Lines are scanned in table order and the first complete line wins.
/// Returns `Some(marker)` if a marker fills a whole line, `None` otherwise.
#[instrument(skip_all, fields(side = board.side()))]
pub fn check_winner(board: &Board, lines: &LineTable) -> Option<Marker> {
    for (kind, squares) in lines.iter() {
        let Some(first) = squares
            .first()
            .and_then(|&pos| board.get(pos))
            .and_then(Square::marker)
        else {
            continue;
        };
        if squares
            .iter()
            .all(|&pos| board.get(pos) == Some(Square::Occupied(first)))
        {
            debug!(?kind, marker = %first, "Complete line found");
            return Some(first);
        }
    }

    None
}

/// Pure evaluation of a board: a win, a tie, or nothing yet.
///
/// The tie check only runs when no line is complete, so a full
/// board with a completed line reports the win.
#[instrument(skip_all, fields(side = board.side()))]
pub fn evaluate(board: &Board, lines: &LineTable) -> Option<Outcome> {
    if let Some(winner) = check_winner(board, lines) {
        return Some(Outcome::Winner(winner));
    }
    if super::is_full(board) {
        return Some(Outcome::Tie);
    }
    None
}
