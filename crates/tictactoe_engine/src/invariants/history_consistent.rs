//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: every occupied cell has exactly one history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
