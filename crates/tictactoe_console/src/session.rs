//! Applies player input to an engine.

use crate::input::{HELP, Input};
use tictactoe_engine::{Coordinate, GameEngine};
use tracing::{debug, instrument};

/// What the input loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Keep reading, optionally printing a message first.
    Continue(Option<String>),
    /// Stop reading input.
    Quit,
}

/// Drives the engine with one parsed input.
///
/// Board and turn output comes from the engine's observers; the reply
/// only carries messages the engine does not publish, such as refusals.
#[instrument(skip(engine))]
pub fn handle(engine: &mut GameEngine, input: Input) -> Reply {
    match input {
        Input::Move(at) => place(engine, at),
        Input::Tag(tag) => match Coordinate::from_tag(tag, engine.size()) {
            Some(at) => place(engine, at),
            None => Reply::Continue(Some(format!(
                "No cell #{}; cells are numbered 1 to {}",
                tag,
                engine.board().cells().len()
            ))),
        },
        Input::Restart => {
            engine.restart();
            Reply::Continue(None)
        }
        Input::Help => Reply::Continue(Some(HELP.to_string())),
        Input::Quit => Reply::Quit,
    }
}

fn place(engine: &mut GameEngine, at: Coordinate) -> Reply {
    match engine.make_move(at.row, at.column) {
        Ok(()) => Reply::Continue(None),
        Err(e) => {
            debug!(error = %e, "Move refused");
            Reply::Continue(Some(e.to_string()))
        }
    }
}
