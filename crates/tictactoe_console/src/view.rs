//! Terminal presentation of engine events.

use std::io::Write;
use tictactoe_engine::{GameEvent, GameObserver, GameState, Mark};
use tracing::{instrument, warn};

/// Observer that prints the board and game messages as they happen.
#[derive(Debug)]
pub struct TerminalView<W> {
    turn: Mark,
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// Creates a view that starts out showing `turn` to move.
    pub fn new(turn: Mark, out: W) -> Self {
        Self { turn, out }
    }

    /// Lines to print for one event, tracking whose turn it is.
    pub fn lines_for(&mut self, event: &GameEvent) -> Vec<String> {
        match event {
            GameEvent::BoardChanged(change) => {
                vec![change.current.to_string(), String::new()]
            }
            GameEvent::TurnChanged(mark) => {
                self.turn = *mark;
                vec![format!("Player {} to move", mark)]
            }
            GameEvent::StateChanged(GameState::Won) => vec![
                format!("Player {} Won!", self.turn),
                "Type `restart` to play again.".to_string(),
            ],
            GameEvent::StateChanged(GameState::Tied) => vec![
                "Game Tied".to_string(),
                "Type `restart` to play again.".to_string(),
            ],
            GameEvent::StateChanged(GameState::Empty) => vec!["New game".to_string()],
            GameEvent::StateChanged(GameState::Started) => Vec::new(),
        }
    }
}

impl<W: Write> GameObserver for TerminalView<W> {
    #[instrument(skip(self))]
    fn on_event(&mut self, event: &GameEvent) {
        for line in self.lines_for(event) {
            if let Err(e) = writeln!(self.out, "{}", line) {
                warn!(error = %e, "Failed to write to terminal");
                return;
            }
        }
    }
}
