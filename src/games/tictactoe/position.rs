//! Row/column positions on an N×N board.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square addressed by row and column (both 0-indexed).
///
/// The board index is `row * side + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position from a row-major board index.
    ///
    /// Returns `None` if the index is off a board of the given side.
    #[instrument]
    pub fn from_index(index: usize, side: usize) -> Option<Self> {
        if side == 0 || index >= side.checked_mul(side)? {
            return None;
        }
        Some(Self::new(index / side, index % side))
    }

    /// Converts to a row-major board index.
    ///
    /// Returns `None` if the position is off a board of the given side.
    pub fn to_index(self, side: usize) -> Option<usize> {
        if self.row >= side || self.col >= side {
            return None;
        }
        Some(self.row * side + self.col)
    }

    /// Parses player input into a position on a board of the given side.
    ///
    /// Accepts the 1-based label shown by [`Board::display`] (`"5"`), or a
    /// 1-based `row col` pair separated by a space or comma (`"2 3"`, `"2,3"`).
    #[instrument]
    pub fn parse(input: &str, side: usize) -> Option<Self> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [label] => {
                let label: usize = label.parse().ok()?;
                Self::from_index(label.checked_sub(1)?, side)
            }
            [row, col] => {
                let row: usize = row.parse().ok()?;
                let col: usize = col.parse().ok()?;
                let pos = Self::new(row.checked_sub(1)?, col.checked_sub(1)?);
                pos.to_index(side).map(|_| pos)
            }
            _ => None,
        }
    }

    /// Returns every empty square on the board, in row-major order.
    #[instrument(skip(board), fields(side = board.side()))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        let side = board.side();
        (0..board.len())
            .filter(|&index| board.is_empty(index))
            .filter_map(|index| Self::from_index(index, side))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}
