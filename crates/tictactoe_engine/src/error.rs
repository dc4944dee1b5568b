//! Engine error types.

use crate::types::{GameState, Mark};

/// Why a well-addressed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The cell already holds a mark.
    #[display("cell already taken by {}", _0)]
    CellOccupied(Mark),

    /// The game has already ended.
    #[display("game is already {}", _0)]
    GameOver(GameState),
}

/// Error that can occur when building or driving a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `[1, size]`.
    #[display("Coordinate ({}, {}) is outside the {}x{} board", row, column, size, size)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Board dimension.
        size: usize,
    },

    /// Coordinate is valid but the move is not allowed right now.
    #[display("Illegal move at ({}, {}): {}", row, column, reason)]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Why the move was refused.
        reason: Rejection,
    },

    /// Board dimension must be at least 1.
    #[display("Invalid board size {}", _0)]
    InvalidSize(usize),

    /// A board could not be parsed or resumed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

impl std::error::Error for EngineError {}
