//! Serializable copy of an engine's observable state.

use crate::action::Move;
use crate::board::Board;
use crate::engine::GameEngine;
use crate::types::{GameState, Mark};
use serde::Serialize;

/// Point-in-time view of a game, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Board dimension N.
    pub size: usize,
    /// Board contents.
    pub board: Board,
    /// Mark to move, or the winner once won.
    pub turn: Mark,
    /// Game phase.
    pub state: GameState,
    /// Accepted moves, oldest first.
    pub history: Vec<Move>,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            size: engine.size(),
            board: engine.board().clone(),
            turn: engine.turn(),
            state: engine.state(),
            history: engine.history().to_vec(),
        }
    }
}
