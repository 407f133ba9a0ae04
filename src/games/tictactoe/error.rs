//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};

/// Error constructing a board of an unsupported size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardSizeError {
    /// A board needs at least one square.
    #[display("Board must have at least one square")]
    Empty,

    /// The square count has no integer square root.
    #[display("Board of {} squares is not a perfect square", _0)]
    NotPerfectSquare(#[error(not(source))] usize),

    /// The side length is above the supported maximum.
    #[display("Board side {} is too large", _0)]
    TooLarge(#[error(not(source))] usize),

    /// The square count does not match the side length.
    #[display("Board side {} does not fit {} squares", side, squares)]
    Mismatched {
        /// Declared side length.
        side: usize,
        /// Number of squares supplied.
        squares: usize,
    },
}

/// Reason a move was rejected.
///
/// A rejected move never changes the board or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The position is outside the board.
    #[display("Position {} is out of bounds (board has {} squares)", position, cells)]
    OutOfBounds {
        /// The requested position.
        position: usize,
        /// Number of squares on the board.
        cells: usize,
    },
}
