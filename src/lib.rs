//! Squaretoe - rules engine for N×N tic-tac-toe
//!
//! The engine tracks a square board of any perfect-square size,
//! alternates turns between `X` and `O`, validates moves, and detects
//! wins along rows, columns, and the two main diagonals.
//!
//! # Architecture
//!
//! - **Engine**: [`BoardEngine`] owns one game's board, turn, and result
//! - **Rules**: pure line evaluation in [`rules`]
//! - **Adapter**: [`BoardAdapter`] maps UI events onto engine calls
//! - **Config**: [`GameConfig`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use squaretoe::{BoardEngine, Marker, Verdict};
//!
//! let mut engine = BoardEngine::new(9).unwrap();
//! for pos in [0, 1, 3, 4, 6] {
//!     let turn = engine.current_turn();
//!     engine.perform_move(pos, turn).unwrap();
//! }
//! assert_eq!(engine.check_for_winner(), Verdict::Winner(Marker::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod config;
mod games;

// Crate-level exports - UI adapter
pub use adapter::{BoardAdapter, UiEvent};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardEngine, BoardSizeError, MAX_SIDE, Marker, MoveError, Outcome, Position, Square,
    Verdict, rules,
};
