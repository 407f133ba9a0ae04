mod error;
mod game;
mod position;
mod types;

pub mod rules;

pub use error::{BoardSizeError, MoveError};
pub use game::BoardEngine;
pub use position::Position;
pub use types::{Board, MAX_SIDE, Marker, Outcome, Square, Verdict};
