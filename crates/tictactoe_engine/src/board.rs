//! The N×N board and its textual forms.

use crate::error::EngineError;
use crate::types::{Cell, Coordinate, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Square tic-tac-toe board, stored row-major.
///
/// Boards handed out by the engine are snapshots: the engine keeps
/// the only mutable copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Largest supported board dimension.
    pub const MAX_SIZE: usize = 1024;

    /// Number of cells on a `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or above
    /// [`Board::MAX_SIZE`].
    pub fn cell_count(size: usize) -> Result<usize, EngineError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(EngineError::InvalidSize(size));
        }
        size.checked_mul(size).ok_or(EngineError::InvalidSize(size))
    }

    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or above
    /// [`Board::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, EngineError> {
        let count = Self::cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Parses a row-major state string of exactly `size * size` cells.
    #[instrument]
    pub fn parse(size: usize, text: &str) -> Result<Self, EngineError> {
        let mut board = Self::new(size)?;
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != board.cells.len() {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells for a {}x{} board, found {}",
                board.cells.len(),
                size,
                size,
                symbols.len()
            )));
        }
        for (cell, symbol) in board.cells.iter_mut().zip(symbols) {
            *cell = Cell::from_symbol(symbol).ok_or_else(|| {
                EngineError::InvalidBoard(format!("unrecognised cell symbol {:?}", symbol))
            })?;
        }
        Ok(board)
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at a coordinate, `None` when out of range.
    pub fn get(&self, at: Coordinate) -> Option<Cell> {
        at.index(self.size).map(|index| self.cells[index])
    }

    /// Whether the cell at `at` is in range and empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        matches!(self.get(at), Some(Cell::Empty))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .filter_map(|(index, _)| Coordinate::from_index(index, self.size))
            .collect()
    }

    /// Row-major string with one character per cell.
    pub fn to_state_string(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }

    /// Coordinates whose cell differs between two boards of equal size.
    pub fn diff(previous: &Board, current: &Board) -> Vec<Coordinate> {
        if previous.size != current.size {
            return Vec::new();
        }
        previous
            .cells
            .iter()
            .zip(&current.cells)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .filter_map(|(index, _)| Coordinate::from_index(index, current.size))
            .collect()
    }

    /// Writes a cell. Callers must have range-checked `at`.
    pub(crate) fn set(&mut self, at: Coordinate, cell: Cell) {
        if let Some(index) = at.index(self.size) {
            self.cells[index] = cell;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    /// The classic 3×3 board.
    fn default() -> Self {
        Self {
            size: 3,
            cells: vec![Cell::Empty; 9],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = vec!["-"; self.size].join("+");
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            let line: Vec<String> = cells.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses a state string, inferring N from its length.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let len = text.chars().count();
        let size = (1..=len).find(|n| n * n >= len).unwrap_or(0);
        if size == 0 || size * size != len {
            return Err(EngineError::InvalidBoard(format!(
                "{} cells do not form a square board",
                len
            )));
        }
        Self::parse(size, text)
    }
}

impl TryFrom<String> for Board {
    type Error = EngineError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_state_string()
    }
}

/// Old and new board around a single engine mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardChange {
    /// Board before the mutation.
    pub previous: Board,
    /// Board after the mutation.
    pub current: Board,
}

impl BoardChange {
    /// Coordinates that changed.
    pub fn changed(&self) -> Vec<Coordinate> {
        Board::diff(&self.previous, &self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(EngineError::InvalidSize(0)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let huge = 1usize << 33;
        assert_eq!(Board::new(huge), Err(EngineError::InvalidSize(huge)));
        assert_eq!(Board::new(usize::MAX), Err(EngineError::InvalidSize(usize::MAX)));
        assert_eq!(
            Board::new(Board::MAX_SIZE + 1),
            Err(EngineError::InvalidSize(Board::MAX_SIZE + 1))
        );
        assert_eq!(Board::cell_count(Board::MAX_SIZE), Ok(Board::MAX_SIZE * Board::MAX_SIZE));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.cells().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.empty_coordinates().len(), 9);
        assert_eq!(board.to_state_string(), "         ");
    }

    #[test]
    fn test_parse_state_string() {
        let board: Board = "XO  X   O".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(Coordinate::new(1, 1)), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(Coordinate::new(1, 2)), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(Coordinate::new(3, 3)), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XO ".parse::<Board>(),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::parse(2, "XO?X"),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::parse(3, "XO"),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::parse(3, "X O X  O ").unwrap();
        assert_eq!(board.to_string(), "X| |O\n-+-+-\n |X| \n-+-+-\n |O| ");
    }

    #[test]
    fn test_diff() {
        let before = Board::new(3).unwrap();
        let mut after = before.clone();
        after.set(Coordinate::new(2, 2), Cell::Occupied(Mark::X));
        let change = BoardChange {
            previous: before,
            current: after,
        };
        assert_eq!(change.changed(), vec![Coordinate::new(2, 2)]);
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut board = Board::new(3).unwrap();
        board.set(Coordinate::new(4, 1), Cell::Occupied(Mark::X));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_serde_uses_state_string() {
        let board: Board = "XO X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"XO X\"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
