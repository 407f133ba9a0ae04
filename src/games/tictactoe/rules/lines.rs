//! Line membership for a board of side S.
//!
//! The table is built once per side length. Its order is the
//! evaluation order used by win detection: every column, then every
//! row, then the primary diagonal, then the anti-diagonal.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of line a set of squares forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Column `j`: squares `j, j+S, j+2S, ...`.
    Column(usize),
    /// Row `j`: squares `jS .. jS+S`.
    Row(usize),
    /// Top-left to bottom-right: squares `0, S+1, 2S+2, ...`.
    Diagonal,
    /// Top-right to bottom-left: squares `S-1, 2S-2, 3S-3, ...`.
    AntiDiagonal,
}

/// Precomputed lines for one side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    lines: Vec<(LineKind, Vec<usize>)>,
}

impl LineTable {
    /// Builds the line table for a board of the given side length.
    #[instrument]
    pub fn for_side(side: usize) -> Self {
        let mut lines = Vec::with_capacity(2 * side + 2);

        for col in 0..side {
            let squares = (0..side).map(|row| row * side + col).collect();
            lines.push((LineKind::Column(col), squares));
        }

        for row in 0..side {
            let squares = (0..side).map(|col| row * side + col).collect();
            lines.push((LineKind::Row(row), squares));
        }

        let diagonal = (0..side).map(|i| i * side + i).collect();
        lines.push((LineKind::Diagonal, diagonal));

        let anti_diagonal = (0..side).map(|i| i * side + (side - 1 - i)).collect();
        lines.push((LineKind::AntiDiagonal, anti_diagonal));

        Self { lines }
    }

    /// Iterates lines in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (LineKind, &[usize])> {
        self.lines
            .iter()
            .map(|(kind, squares)| (*kind, squares.as_slice()))
    }

    /// Number of lines (2S + 2).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the table holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
