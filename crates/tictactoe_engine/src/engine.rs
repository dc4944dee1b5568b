//! The game engine state machine.
//!
//! ```text
//! Empty   --first move-->            Started (or Won on a 1x1 board)
//! Started --move, no win/tie-->      Started
//! Started --move completes a line--> Won   [terminal]
//! Started --move fills the board-->  Tied  [terminal]
//! any     --restart-->               Empty
//! ```

use crate::action::Move;
use crate::board::{Board, BoardChange};
use crate::config::EngineConfig;
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::error::EngineError;
use crate::observer::{GameEvent, GameObserver, ObserverId, Observers};
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Coordinate, GameState, Mark};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine owning one board for the lifetime of a game screen.
///
/// Collaborators read state through accessors and change it only through
/// [`make_move`](Self::make_move) and [`restart`](Self::restart). Board
/// size and starting mark are fixed at construction.
#[derive(Debug)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) state: GameState,
    pub(crate) starting_mark: Mark,
    pub(crate) history: Vec<Move>,
    observers: Observers,
}

impl GameEngine {
    /// Creates an engine with an empty `size`×`size` board, X to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or above
    /// [`Board::MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Self::with_config(&EngineConfig::default().with_board_size(size))
    }

    /// Creates an engine from configuration.
    #[instrument]
    pub fn with_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let board = Board::new(*config.board_size())?;
        info!(size = board.size(), starting_mark = %config.starting_mark(), "Creating game engine");
        Ok(Self {
            board,
            turn: *config.starting_mark(),
            state: GameState::Empty,
            starting_mark: *config.starting_mark(),
            history: Vec::new(),
            observers: Observers::default(),
        })
    }

    /// Resumes a game from an existing board.
    ///
    /// The board must be reachable by alternating play from
    /// `starting_mark`: the starting mark has the same number of cells as
    /// its opponent or one more, at most one mark owns a line, and a
    /// winner must be the player who moved last. Turn and state are
    /// derived from the board. The move history is rebuilt in row-major
    /// order per mark, since the real order is unknown.
    #[instrument(skip(board), fields(board = %board.to_state_string()))]
    pub fn resume(board: Board, starting_mark: Mark) -> Result<Self, EngineError> {
        let other = starting_mark.opponent();
        let starting_count = board.count(starting_mark);
        let other_count = board.count(other);

        let last_mover = if starting_count == other_count + 1 {
            starting_mark
        } else if starting_count == other_count {
            other
        } else {
            warn!(starting_count, other_count, "Mark counts cannot alternate");
            return Err(EngineError::InvalidBoard(format!(
                "{} has {} cells and {} has {}",
                starting_mark, starting_count, other, other_count
            )));
        };

        let owners = rules::win::line_owners(&board);
        let (state, turn) = match owners.as_slice() {
            [] if board.occupied_count() == 0 => (GameState::Empty, starting_mark),
            [] if board.is_full() => (GameState::Tied, last_mover),
            [] => (GameState::Started, last_mover.opponent()),
            [winner] if *winner == last_mover => (GameState::Won, *winner),
            [winner] => {
                return Err(EngineError::InvalidBoard(format!(
                    "{} owns a line but {} moved last",
                    winner, last_mover
                )));
            }
            _ => {
                return Err(EngineError::InvalidBoard(
                    "both players own a line".to_string(),
                ));
            }
        };

        let cells_of = |mark: Mark| -> Vec<Coordinate> {
            board
                .cells()
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Occupied(mark))
                .filter_map(|(index, _)| Coordinate::from_index(index, board.size()))
                .collect()
        };
        let starting_cells = cells_of(starting_mark);
        let other_cells = cells_of(other);

        let mut history = Vec::with_capacity(board.occupied_count());
        for (i, at) in starting_cells.into_iter().enumerate() {
            history.push(Move::new(starting_mark, at));
            if let Some(reply) = other_cells.get(i) {
                history.push(Move::new(other, *reply));
            }
        }

        info!(%state, %turn, moves = history.len(), "Resumed game");
        let engine = Self {
            board,
            turn,
            state,
            starting_mark,
            history,
            observers: Observers::default(),
        };
        engine.debug_check_invariants();
        Ok(engine)
    }

    /// Current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose move is next, or the winner once the game is won.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Current game phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Mark that starts every game on this engine.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The winner, once the game is won.
    pub fn winner(&self) -> Option<Mark> {
        (self.state == GameState::Won).then_some(self.turn)
    }

    /// Coordinates of the completed line, once the game is won.
    pub fn winning_line(&self) -> Option<Vec<Coordinate>> {
        if self.state != GameState::Won {
            return None;
        }
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Serializable copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Whether the current player may mark `(row, column)`.
    ///
    /// Returns `Ok(false)` for an occupied cell or a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] when either component
    /// is outside `[1, size]`.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn can_move(&self, row: usize, column: usize) -> Result<bool, EngineError> {
        match LegalMove::check(&Coordinate::new(row, column), self) {
            Ok(()) => Ok(true),
            Err(err @ EngineError::InvalidCoordinate { .. }) => Err(err),
            Err(_) => Ok(false),
        }
    }

    /// Places the current mark at `(row, column)`.
    ///
    /// On success the board, turn and state are all updated before any
    /// observer hears about it. Observers then receive the board change,
    /// the turn change if the turn flipped, and the state change if the
    /// state moved, in that order. A winning move leaves the turn on the
    /// winner.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidCoordinate`] when out of range.
    /// - [`EngineError::IllegalMove`] when the game is over or the cell
    ///   is taken.
    ///
    /// A rejected move changes nothing and notifies nobody.
    #[instrument(skip(self), fields(turn = %self.turn, state = %self.state))]
    pub fn make_move(&mut self, row: usize, column: usize) -> Result<(), EngineError> {
        let at = Coordinate::new(row, column);
        if let Err(err) = MoveContract::pre(self, &at) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        let previous = self.board.clone();
        let previous_state = self.state;
        let mover = self.turn;

        self.board.set(at, Cell::Occupied(mover));
        self.history.push(Move::new(mover, at));
        debug!(%mover, %at, "Move accepted");

        if rules::check_winner(&self.board).is_some() {
            self.state = GameState::Won;
            info!(winner = %mover, moves = self.history.len(), "Game won");
        } else if rules::is_full(&self.board) {
            self.state = GameState::Tied;
            info!(moves = self.history.len(), "Game tied");
        } else {
            self.state = GameState::Started;
            self.turn = mover.opponent();
        }

        self.debug_check_invariants();

        let mut events = vec![GameEvent::BoardChanged(BoardChange {
            previous,
            current: self.board.clone(),
        })];
        if self.turn != mover {
            events.push(GameEvent::TurnChanged(self.turn));
        }
        if self.state != previous_state {
            events.push(GameEvent::StateChanged(self.state));
        }
        self.observers.publish(&events);

        Ok(())
    }

    /// Clears the board and starts a new game with the starting mark.
    ///
    /// Always notifies board, turn and state, in that order, even when
    /// nothing changed.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn restart(&mut self) {
        let previous = self.board.clone();

        self.board.clear();
        self.history.clear();
        self.state = GameState::Empty;
        self.turn = self.starting_mark;
        info!(size = self.size(), "Game restarted");

        self.debug_check_invariants();

        self.observers.publish(&[
            GameEvent::BoardChanged(BoardChange {
                previous,
                current: self.board.clone(),
            }),
            GameEvent::TurnChanged(self.turn),
            GameEvent::StateChanged(self.state),
        ]);
    }

    /// Registers an observer; returns a handle for [`unsubscribe`](Self::unsubscribe).
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = self.observers.add(Box::new(observer));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        let result = MoveContract::post(self);
        debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            board: Board::default(),
            turn: Mark::X,
            state: GameState::Empty,
            starting_mark: Mark::X,
            history: Vec::new(),
            observers: Observers::default(),
        }
    }
}
