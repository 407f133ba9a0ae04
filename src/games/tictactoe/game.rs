//! Board engine for N×N tic-tac-toe.
//!
//! The engine owns the board, the current turn, and the terminal
//! latch. It is driven by one caller at a time: a move, then a winner
//! check, then a redraw.

use super::error::{BoardSizeError, MoveError};
use super::rules::{self, LineTable};
use super::types::{Board, Marker, Outcome, Square, Verdict};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe board engine.
///
/// # Lifecycle
///
/// - Starts ongoing with an empty board and `Marker::X` to move.
/// - [`perform_move`](Self::perform_move) fills squares and flips the turn.
/// - [`check_for_winner`](Self::check_for_winner) latches the game over on
///   the first win or tie it sees.
/// - [`clear_board`](Self::clear_board) returns to the initial state.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    board: Board,
    lines: LineTable,
    current_turn: Marker,
    outcome: Option<Outcome>,
}

impl BoardEngine {
    /// Creates an engine for a board of `cells` squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `cells` is zero or not a perfect square.
    #[instrument]
    pub fn new(cells: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::from_board(Board::with_cells(cells)?))
    }

    /// Creates an engine for a board with the given side length.
    #[instrument]
    pub fn with_side(side: usize) -> Result<Self, BoardSizeError> {
        Ok(Self::from_board(Board::with_side(side)?))
    }

    fn from_board(board: Board) -> Self {
        let lines = LineTable::for_side(board.side());
        info!(side = board.side(), cells = board.len(), "Board engine created");
        Self {
            board,
            lines,
            current_turn: Marker::X,
            outcome: None,
        }
    }

    /// Returns the marker whose turn it is.
    pub fn current_turn(&self) -> Marker {
        self.current_turn
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        self.board.side()
    }

    /// Returns the cached outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Checks whether a winner check has latched the game over.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Places `marker` at `position`.
    ///
    /// The marker is taken on trust: callers are expected to pass
    /// [`current_turn`](Self::current_turn), but the engine only rejects
    /// moves on a finished game, an out-of-range position, or an occupied
    /// square. An accepted move flips the turn exactly once. A rejected
    /// move changes nothing.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a winner check has ended the game.
    /// - [`MoveError::OutOfBounds`] if `position` is not on the board.
    /// - [`MoveError::Occupied`] if the square already holds a marker.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn perform_move(&mut self, position: usize, marker: Marker) -> Result<(), MoveError> {
        if self.is_over() {
            debug!("Move ignored, game is over");
            return Err(MoveError::GameOver);
        }

        let cells = self.board.len();
        if position >= cells {
            warn!(cells, "Move outside the board");
            return Err(MoveError::OutOfBounds { position, cells });
        }

        if !self.board.is_empty(position) {
            debug!("Square already occupied");
            return Err(MoveError::Occupied(position));
        }

        self.board.set(position, Square::Occupied(marker));
        self.current_turn = self.current_turn.opponent();
        debug!(next = %self.current_turn, "Move applied");
        Ok(())
    }

    /// Places the current turn's marker at `position`.
    ///
    /// Unlike [`perform_move`](Self::perform_move) the caller cannot pick
    /// the marker. Returns the marker that was placed.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: usize) -> Result<Marker, MoveError> {
        let marker = self.current_turn;
        self.perform_move(position, marker)?;
        Ok(marker)
    }

    /// Checks the board for a win or tie and latches the result.
    ///
    /// Runs in two phases within the same call:
    ///
    /// 1. Pure evaluation of every column, every row, the diagonal, and the
    ///    anti-diagonal, in that order, then a tie check.
    /// 2. On the first win or tie, the game is marked over and the outcome
    ///    cached.
    ///
    /// Once the game is over this returns [`Verdict::AlreadyOver`] without
    /// scanning the board again. The cached result stays available from
    /// [`outcome`](Self::outcome).
    #[instrument(skip(self))]
    pub fn check_for_winner(&mut self) -> Verdict {
        if self.is_over() {
            return Verdict::AlreadyOver;
        }

        match rules::evaluate(&self.board, &self.lines) {
            Some(outcome) => {
                self.outcome = Some(outcome);
                info!(%outcome, "Game over");
                Verdict::from(outcome)
            }
            None => Verdict::InProgress,
        }
    }

    /// Empties the board and starts a new game with `Marker::X` to move.
    ///
    /// Allowed at any time, including mid-game and after the game is over.
    #[instrument(skip(self))]
    pub fn clear_board(&mut self) -> &Board {
        self.board.clear();
        self.current_turn = Marker::X;
        self.outcome = None;
        debug!("Board cleared");
        &self.board
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = BoardEngine::new(9).unwrap();
        assert_eq!(engine.current_turn(), Marker::X);
        assert_eq!(engine.side(), 3);
        assert!(!engine.is_over());
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn test_new_rejects_non_square() {
        assert_eq!(
            BoardEngine::new(10).unwrap_err(),
            BoardSizeError::NotPerfectSquare(10)
        );
    }

    #[test]
    fn test_move_flips_turn() {
        let mut engine = BoardEngine::default();
        engine.perform_move(4, Marker::X).unwrap();
        assert_eq!(engine.current_turn(), Marker::O);
        assert_eq!(engine.board().get(4), Some(Square::Occupied(Marker::X)));
    }

    #[test]
    fn test_trusts_caller_marker() {
        let mut engine = BoardEngine::default();
        engine.perform_move(0, Marker::O).unwrap();
        assert_eq!(engine.board().get(0), Some(Square::Occupied(Marker::O)));
        assert_eq!(engine.current_turn(), Marker::O);
    }

    #[test]
    fn test_play_uses_current_turn() {
        let mut engine = BoardEngine::default();
        assert_eq!(engine.play(0), Ok(Marker::X));
        assert_eq!(engine.play(1), Ok(Marker::O));
        assert_eq!(engine.play(1), Err(MoveError::Occupied(1)));
        assert_eq!(engine.current_turn(), Marker::X);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut engine = BoardEngine::default();
        assert_eq!(
            engine.perform_move(9, Marker::X),
            Err(MoveError::OutOfBounds {
                position: 9,
                cells: 9
            })
        );
        assert_eq!(engine.current_turn(), Marker::X);
    }

    #[test]
    fn test_check_latches_once() {
        let mut engine = BoardEngine::default();
        for pos in [0, 3, 1, 4, 2] {
            let marker = engine.current_turn();
            engine.perform_move(pos, marker).unwrap();
        }
        assert_eq!(engine.check_for_winner(), Verdict::Winner(Marker::X));
        assert_eq!(engine.check_for_winner(), Verdict::AlreadyOver);
        assert_eq!(engine.outcome(), Some(Outcome::Winner(Marker::X)));
    }

    #[test]
    fn test_moves_allowed_until_checked() {
        let mut engine = BoardEngine::default();
        for pos in [0, 3, 1, 4, 2] {
            engine.play(pos).unwrap();
        }
        // The line is complete but nobody has asked yet.
        assert!(!engine.is_over());
        assert!(engine.play(8).is_ok());
    }

    #[test]
    fn test_single_square_board() {
        let mut engine = BoardEngine::new(1).unwrap();
        engine.play(0).unwrap();
        assert_eq!(engine.check_for_winner(), Verdict::Winner(Marker::X));
    }
}
