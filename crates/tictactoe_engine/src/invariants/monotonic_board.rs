//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::board::Board;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: cells are write-once within a game.
///
/// Replaying the move history onto an empty board must never hit an
/// occupied cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Ok(mut reconstructed) = Board::new(engine.size()) else {
            return false;
        };

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.coordinate) {
                return false;
            }
            reconstructed.set(mov.coordinate, Cell::Occupied(mov.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Mark, Move};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameEngine::default()));
    }

    #[test]
    fn test_moves_hold() {
        let mut engine = GameEngine::default();
        engine.make_move(1, 1).unwrap();
        engine.make_move(3, 3).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::default();
        engine.make_move(2, 2).unwrap();
        engine
            .board
            .set(Coordinate::new(2, 2), Cell::Occupied(Mark::O));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut engine = GameEngine::default();
        engine.make_move(2, 2).unwrap();
        engine
            .history
            .push(Move::new(Mark::O, Coordinate::new(2, 2)));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
