//! First-class move records.
//!
//! Every accepted move is kept in the engine's history so a game can be
//! replayed and checked against the board.

use crate::types::{Coordinate, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub mark: Mark,
    /// Where the mark went.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, coordinate: Coordinate) -> Self {
        Self { mark, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate)
    }
}
