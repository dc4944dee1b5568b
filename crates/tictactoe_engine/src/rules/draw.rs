//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
///
/// A move that fills the last cell and completes a line is a win, not a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
