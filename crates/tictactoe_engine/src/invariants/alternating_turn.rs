//! Alternating turn invariant: marks alternate from the starting mark.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::GameState;

/// Invariant: players alternate turns.
///
/// History starts with the starting mark and never repeats a mark
/// twice in a row. The mark to move is the next one in sequence while
/// the game is open; once it has ended, it stays on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let Some(last) = history.last() else {
            return engine.turn() == engine.starting_mark();
        };

        if history[0].mark != engine.starting_mark() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match engine.state() {
            GameState::Won | GameState::Tied => engine.turn() == last.mark,
            GameState::Empty | GameState::Started => engine.turn() == last.mark.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the starting mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::default()));
    }

    #[test]
    fn test_sequence_holds() {
        let mut engine = GameEngine::default();
        for (row, column) in [(1, 1), (2, 2), (1, 3), (3, 1)] {
            engine.make_move(row, column).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.turn(), Mark::X);
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut engine = GameEngine::default();
        for (row, column) in [(1, 1), (2, 2), (1, 2), (3, 3), (1, 3)] {
            engine.make_move(row, column).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut engine = GameEngine::default();
        engine.make_move(1, 1).unwrap();
        engine.turn = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
