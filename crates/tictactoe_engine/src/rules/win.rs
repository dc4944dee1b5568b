//! Win detection over every line of an N×N board.

use crate::board::Board;
use crate::types::{Cell, Coordinate, Mark};
use tracing::instrument;

/// All lines that can win on a `size`×`size` board.
///
/// Rows first, then columns, then the main diagonal and the
/// anti-diagonal. Each line holds exactly `size` coordinates.
pub fn lines(size: usize) -> Vec<Vec<Coordinate>> {
    let span = 1..=size;
    let mut lines: Vec<Vec<Coordinate>> = Vec::with_capacity(2 * size + 2);

    for row in span.clone() {
        lines.push(span.clone().map(|column| Coordinate::new(row, column)).collect());
    }
    for column in span.clone() {
        lines.push(span.clone().map(|row| Coordinate::new(row, column)).collect());
    }
    lines.push(span.clone().map(|i| Coordinate::new(i, i)).collect());
    lines.push(span.map(|i| Coordinate::new(i, size + 1 - i)).collect());

    lines
}

/// Owner of a line, if one mark fills all of it.
fn line_owner(board: &Board, line: &[Coordinate]) -> Option<Mark> {
    let first = board.get(*line.first()?)?.mark()?;
    line.iter()
        .all(|at| board.get(*at) == Some(Cell::Occupied(first)))
        .then_some(first)
}

/// First completed line and its owner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<(Mark, Vec<Coordinate>)> {
    lines(board.size())
        .into_iter()
        .find_map(|line| line_owner(board, &line).map(|mark| (mark, line)))
}

/// Returns the mark that owns a complete line, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Every mark that owns at least one complete line.
///
/// Reachable games have at most one; resumed boards may not.
pub(crate) fn line_owners(board: &Board) -> Vec<Mark> {
    let mut owners = Vec::new();
    for line in lines(board.size()) {
        if let Some(mark) = line_owner(board, &line) {
            if !owners.contains(&mark) {
                owners.push(mark);
            }
        }
    }
    owners
}
