//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (starts by default).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used for this mark in board state strings.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Mark),
}

impl Cell {
    /// Character used for this cell in board state strings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    /// Parses a cell from its state-string character.
    ///
    /// Accepts `X`/`O` in either case, the legacy digits `1` (X) and
    /// `0` (O), and space, `.`, `-` or `_` for an empty cell.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' | '1' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' | '0' => Some(Cell::Occupied(Mark::O)),
            ' ' | '.' | '-' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// A 1-indexed (row, column) address on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({}, {})", row, column)]
pub struct Coordinate {
    /// Row, counted from 1 at the top.
    pub row: usize,
    /// Column, counted from 1 at the left.
    pub column: usize,
}

impl Coordinate {
    /// Whether both components lie in `[1, size]`.
    pub fn is_within(&self, size: usize) -> bool {
        (1..=size).contains(&self.row) && (1..=size).contains(&self.column)
    }

    /// Row-major 0-based index on a `size`×`size` board.
    pub fn index(&self, size: usize) -> Option<usize> {
        if !self.is_within(size) {
            return None;
        }
        (self.row - 1)
            .checked_mul(size)?
            .checked_add(self.column - 1)
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        match size.checked_mul(size) {
            Some(cells) if size > 0 && index < cells => {}
            _ => return None,
        }
        Some(Self::new(index / size + 1, index % size + 1))
    }

    /// Maps a flat 1-based cell tag (as carried by UI buttons laid out
    /// row by row) to a coordinate.
    #[instrument]
    pub fn from_tag(tag: usize, size: usize) -> Option<Self> {
        tag.checked_sub(1)
            .and_then(|index| Self::from_index(index, size))
    }

    /// Flat 1-based cell tag for this coordinate.
    pub fn tag(&self, size: usize) -> Option<usize> {
        self.index(size).map(|index| index + 1)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// Phase of the current game. Exactly one holds at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// No move has been made yet.
    Empty,
    /// At least one move, no outcome yet.
    Started,
    /// A player completed a line.
    Won,
    /// The board filled without a completed line.
    Tied,
}

impl GameState {
    /// Whether the game has ended (won or tied).
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won | GameState::Tied)
    }

    /// Whether moves may still be placed.
    pub fn accepts_moves(self) -> bool {
        !self.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        for mark in Mark::iter() {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('x'), Some(Cell::Occupied(Mark::X)));
        assert_eq!(Cell::from_symbol('0'), Some(Cell::Occupied(Mark::O)));
        assert_eq!(Cell::from_symbol('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('?'), None);
        assert_eq!(Cell::Occupied(Mark::O).symbol(), 'O');
        assert_eq!(Cell::Empty.symbol(), ' ');
    }

    #[test]
    fn test_coordinate_index() {
        assert_eq!(Coordinate::new(1, 1).index(3), Some(0));
        assert_eq!(Coordinate::new(2, 3).index(3), Some(5));
        assert_eq!(Coordinate::new(3, 3).index(3), Some(8));
        assert_eq!(Coordinate::new(0, 1).index(3), None);
        assert_eq!(Coordinate::new(4, 4).index(3), None);
    }

    #[test]
    fn test_from_index_with_huge_size() {
        assert_eq!(Coordinate::from_index(5, usize::MAX), None);
        assert_eq!(Coordinate::from_index(0, 0), None);
        assert_eq!(Coordinate::from_tag(1, 1usize << 33), None);
        assert_eq!(Coordinate::new(usize::MAX, 1).index(usize::MAX), None);
    }

    #[test]
    fn test_tag_mapping() {
        assert_eq!(Coordinate::from_tag(1, 3), Some(Coordinate::new(1, 1)));
        assert_eq!(Coordinate::from_tag(6, 3), Some(Coordinate::new(2, 3)));
        assert_eq!(Coordinate::from_tag(9, 3), Some(Coordinate::new(3, 3)));
        assert_eq!(Coordinate::from_tag(0, 3), None);
        assert_eq!(Coordinate::from_tag(10, 3), None);

        for tag in 1..=16 {
            let coordinate = Coordinate::from_tag(tag, 4).unwrap();
            assert_eq!(coordinate.tag(4), Some(tag));
        }
    }

    #[test]
    fn test_state_phases() {
        let over: Vec<_> = GameState::iter().filter(|s| s.is_over()).collect();
        assert_eq!(over, vec![GameState::Won, GameState::Tied]);
        assert!(GameState::Empty.accepts_moves());
        assert_eq!(GameState::Tied.to_string(), "tied");
    }
}
