//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the engine, the invariants and resumed games all judge a
//! position the same way.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{check_winner, lines, winning_line};
