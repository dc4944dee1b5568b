//! Contract-based move validation.
//!
//! A move is checked against its preconditions before the engine touches
//! any state, and the resulting engine is checked against the invariant
//! set afterwards.

use crate::engine::GameEngine;
use crate::error::{EngineError, Rejection};
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::types::{Cell, Coordinate};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks that the state after the action still satisfies every
    /// invariant.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    pub fn check(at: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        if at.is_within(engine.size()) {
            Ok(())
        } else {
            Err(EngineError::InvalidCoordinate {
                row: at.row,
                column: at.column,
                size: engine.size(),
            })
        }
    }
}

/// Precondition: the game still accepts moves.
pub struct GameInPlay;

impl GameInPlay {
    pub fn check(at: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        if engine.state().accepts_moves() {
            Ok(())
        } else {
            Err(EngineError::IllegalMove {
                row: at.row,
                column: at.column,
                reason: Rejection::GameOver(engine.state()),
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    pub fn check(at: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        match engine.board().get(*at) {
            Some(Cell::Occupied(mark)) => Err(EngineError::IllegalMove {
                row: at.row,
                column: at.column,
                reason: Rejection::CellOccupied(mark),
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: bounds, phase, cell.
pub struct LegalMove;

impl LegalMove {
    #[instrument(skip(engine))]
    pub fn check(at: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        InBounds::check(at, engine)?;
        GameInPlay::check(at, engine)?;
        CellIsEmpty::check(at, engine)?;
        Ok(())
    }
}

/// Contract for placing the current mark.
pub struct MoveContract;

impl Contract<GameEngine, Coordinate> for MoveContract {
    fn pre(engine: &GameEngine, at: &Coordinate) -> Result<(), EngineError> {
        LegalMove::check(at, engine)
    }

    fn post(after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        EngineInvariants::check_all(after).inspect_err(|violations| {
            for violation in violations {
                warn!(%violation, "Postcondition failed");
            }
        })
    }
}
