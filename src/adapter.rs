//! Thin UI adapter over the board engine.
//!
//! Maps user events onto engine calls and keeps the text a front end
//! shows: the board grid and a one-line result.

use crate::games::tictactoe::{Board, BoardEngine, Marker, MoveError, Verdict};
use tracing::{debug, instrument};

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A square was activated (row-major index).
    Activate(usize),
    /// The reset control was activated.
    Reset,
}

/// Owns one game and the text derived from it.
#[derive(Debug, Clone, Default)]
pub struct BoardAdapter {
    engine: BoardEngine,
    result: Option<String>,
}

impl BoardAdapter {
    /// Wraps an engine.
    pub fn new(engine: BoardEngine) -> Self {
        Self {
            engine,
            result: None,
        }
    }

    /// Handles one event to completion.
    ///
    /// An activation passes the turn taken before the move to the engine,
    /// then asks for a winner. A rejected move is otherwise ignored; the
    /// error is returned for front ends that want to show it.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) -> Result<(), MoveError> {
        match event {
            UiEvent::Activate(position) => {
                let mover = self.engine.current_turn();
                let moved = self.engine.perform_move(position, mover);
                if let Err(error) = &moved {
                    debug!(%error, "Move ignored");
                }
                let verdict = self.engine.check_for_winner();
                self.record(verdict);
                moved
            }
            UiEvent::Reset => {
                self.engine.clear_board();
                self.result = None;
                Ok(())
            }
        }
    }

    fn record(&mut self, verdict: Verdict) {
        let text = match verdict {
            Verdict::Winner(marker) => format!("{} wins!", marker),
            Verdict::Tie => "It's a tie!".to_string(),
            Verdict::InProgress | Verdict::AlreadyOver => return,
        };
        debug!(%text, "Result shown");
        self.result = Some(text);
    }

    /// Returns the result line, if the game has ended.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns the board being shown.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Returns the marker to move next.
    pub fn current_turn(&self) -> Marker {
        self.engine.current_turn()
    }

    /// Returns the engine.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Renders the board followed by the result line, if any.
    pub fn render(&self) -> String {
        let mut text = self.engine.board().display();
        if let Some(result) = &self.result {
            text.push_str("\n\n");
            text.push_str(result);
        }
        text
    }
}
