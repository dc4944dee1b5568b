//! Tic-tac-toe rules engine.
//!
//! Owns an N×N board, strict turn alternation, move legality, and
//! win/tie detection. A presentation layer drives the engine through
//! [`GameEngine::can_move`], [`GameEngine::make_move`] and
//! [`GameEngine::restart`], and observes it by subscribing a
//! [`GameObserver`].
//!
//! # Architecture
//!
//! - **Types**: marks, cells, coordinates, game state
//! - **Board**: the grid, its state-string form, and board diffs
//! - **Rules**: pure win and tie evaluation over all lines of a board
//! - **Engine**: the state machine and synchronous notification
//! - **Invariants**: checkable properties of a running engine
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameState, Mark};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::default();
//! for (row, column) in [(1, 1), (2, 2), (1, 2), (3, 3), (1, 3)] {
//!     engine.make_move(row, column)?;
//! }
//! assert_eq!(engine.state(), GameState::Won);
//! assert_eq!(engine.turn(), Mark::X);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod contracts;
mod engine;
mod error;
pub mod invariants;
mod observer;
pub mod rules;
mod snapshot;
mod types;

pub use action::Move;
pub use board::{Board, BoardChange};
pub use config::{ConfigError, EngineConfig};
pub use engine::GameEngine;
pub use error::{EngineError, Rejection};
pub use observer::{GameEvent, GameObserver, ObserverId};
pub use snapshot::GameSnapshot;
pub use types::{Cell, Coordinate, GameState, Mark};
