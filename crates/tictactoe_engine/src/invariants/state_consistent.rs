//! State consistency invariant: the phase agrees with the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;
use crate::types::GameState;

/// Invariant: `state` equals a fresh evaluation of board and history.
pub struct StateConsistentInvariant;

impl StateConsistentInvariant {
    /// The state a board with this much history should be in.
    pub(crate) fn expected(engine: &GameEngine) -> GameState {
        if engine.history().is_empty() {
            GameState::Empty
        } else if rules::check_winner(engine.board()).is_some() {
            GameState::Won
        } else if rules::is_full(engine.board()) {
            GameState::Tied
        } else {
            GameState::Started
        }
    }
}

impl Invariant<GameEngine> for StateConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.state() == Self::expected(engine)
    }

    fn description() -> &'static str {
        "Game state matches the board"
    }
}
