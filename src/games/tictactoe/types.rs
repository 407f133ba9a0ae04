//! Core domain types for N×N tic-tac-toe.

use super::error::BoardSizeError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker placed by one of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    #[display("X")]
    X,
    /// Marker O (moves second).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the occupying marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// Largest supported side length.
pub const MAX_SIDE: usize = 1024;

/// Square board of `side * side` squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    side: usize,
    squares: Vec<Square>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardSizeError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        check_side(repr.side)?;
        if repr.side * repr.side != repr.squares.len() {
            return Err(BoardSizeError::Mismatched {
                side: repr.side,
                squares: repr.squares.len(),
            });
        }
        Ok(Self {
            side: repr.side,
            squares: repr.squares,
        })
    }
}

/// Checks that a side length is between 1 and [`MAX_SIDE`].
pub(crate) fn check_side(side: usize) -> Result<(), BoardSizeError> {
    if side == 0 {
        return Err(BoardSizeError::Empty);
    }
    if side > MAX_SIDE {
        return Err(BoardSizeError::TooLarge(side));
    }
    Ok(())
}

impl Board {
    /// Creates an empty board with `cells` squares.
    ///
    /// `cells` must be a non-zero perfect square with a side of at most
    /// [`MAX_SIDE`].
    #[instrument]
    pub fn with_cells(cells: usize) -> Result<Self, BoardSizeError> {
        let side = integer_sqrt(cells);
        if cells == 0 {
            return Err(BoardSizeError::Empty);
        }
        if side * side != cells {
            return Err(BoardSizeError::NotPerfectSquare(cells));
        }
        check_side(side)?;
        Ok(Self::square(side))
    }

    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn with_side(side: usize) -> Result<Self, BoardSizeError> {
        check_side(side)?;
        Ok(Self::square(side))
    }

    fn square(side: usize) -> Self {
        Self {
            side,
            squares: vec![Square::Empty; side * side],
        }
    }

    /// Side length S.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of squares N.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty. Out-of-range positions are not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    pub(crate) fn set(&mut self, pos: usize, square: Square) {
        self.squares[pos] = square;
    }

    pub(crate) fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based label so a player can name them.
    pub fn display(&self) -> String {
        let width = self.len().to_string().len();
        let rule = vec!["-".repeat(width); self.side].join("+");
        let mut result = String::new();
        for row in 0..self.side {
            let cells: Vec<String> = (0..self.side)
                .map(|col| {
                    let pos = row * self.side + col;
                    let symbol = match self.squares[pos] {
                        Square::Empty => (pos + 1).to_string(),
                        Square::Occupied(marker) => marker.to_string(),
                    };
                    format!("{symbol:>width$}")
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < self.side {
                result.push('\n');
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::square(3)
    }
}

/// Floor of the square root, computed on integers.
pub(crate) fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut lo = 1usize;
    let mut hi = n.min(1 << (usize::BITS / 2));
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if mid <= n / mid {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Cached terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A marker completed a line.
    Winner(Marker),
    /// The board filled with no completed line.
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(marker) => write!(f, "{} wins!", marker),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Result of asking the engine for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A marker completed a line on this check.
    Winner(Marker),
    /// The board filled with no completed line on this check.
    Tie,
    /// No line is complete and empty squares remain.
    InProgress,
    /// The game was already over before this check.
    AlreadyOver,
}

impl From<Outcome> for Verdict {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(marker) => Verdict::Winner(marker),
            Outcome::Tie => Verdict::Tie,
        }
    }
}
