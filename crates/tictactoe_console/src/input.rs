//! Parsing of interactive player input.

use derive_more::Display;
use tictactoe_engine::Coordinate;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell by row and column.
    Move(Coordinate),
    /// Mark a cell by its flat 1-based tag.
    Tag(usize),
    /// Start a new game.
    Restart,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unrecognised input {:?}; type `help` for commands", _0)]
pub struct InputError(pub String);

impl std::error::Error for InputError {}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   mark a cell (also `row,col`), 1-indexed
  #<tag>        mark a cell by number, counting row by row from 1
  restart       start a new game
  help          show this message
  quit          leave";

/// Parses a single line of input.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "restart" | "r" | "new" => return Ok(Input::Restart),
        "help" | "h" | "?" => return Ok(Input::Help),
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    if let Some(tag) = trimmed.strip_prefix('#') {
        return tag
            .trim()
            .parse()
            .map(Input::Tag)
            .map_err(|_| InputError(line.to_string()));
    }

    parse_coordinate(trimmed)
        .map(Input::Move)
        .ok_or_else(|| InputError(line.to_string()))
}

/// Parses `row col` or `row,col`.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [row, column] => Some(Coordinate::new(row.parse().ok()?, column.parse().ok()?)),
        _ => None,
    }
}
