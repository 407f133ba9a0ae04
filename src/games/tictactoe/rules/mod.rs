//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from the
//! engine so evaluation never touches game state.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{LineKind, LineTable};
pub use win::{check_winner, evaluate};
