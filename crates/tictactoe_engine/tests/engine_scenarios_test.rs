//! End-to-end games on the engine's public API.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_engine::{
    Board, Cell, EngineError, GameEngine, GameEvent, GameState, Mark, Rejection,
};

const ROW_WIN: [(usize, usize); 5] = [(1, 1), (2, 2), (1, 2), (3, 3), (1, 3)];

const TIE: [(usize, usize); 9] = [
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 2),
    (3, 1),
    (2, 1),
    (2, 3),
    (3, 3),
    (3, 2),
];

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        engine.make_move(row, column).expect("Valid move");
    }
}

#[test]
fn test_row_win() {
    let mut engine = GameEngine::default();
    play(&mut engine, &ROW_WIN);

    assert_eq!(engine.state(), GameState::Won);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.turn().to_string(), "X");
}

#[test]
fn test_full_board_tie() {
    let mut engine = GameEngine::default();
    play(&mut engine, &TIE);

    assert_eq!(engine.state(), GameState::Tied);
    assert!(engine.board().is_full());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_out_of_range_move() {
    let mut engine = GameEngine::new(3).unwrap();
    assert_eq!(
        engine.make_move(4, 4),
        Err(EngineError::InvalidCoordinate {
            row: 4,
            column: 4,
            size: 3
        })
    );
    assert_eq!(engine.state(), GameState::Empty);
}

#[test]
fn test_restart_replays_identically() {
    let mut engine = GameEngine::default();
    play(&mut engine, &TIE);
    assert_eq!(engine.state(), GameState::Tied);

    engine.restart();
    assert_eq!(engine.state(), GameState::Empty);
    assert_eq!(engine.turn(), Mark::X);
    assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));

    play(&mut engine, &ROW_WIN);
    let first = engine.snapshot();

    engine.restart();
    play(&mut engine, &ROW_WIN);
    assert_eq!(engine.snapshot(), first);
    assert_eq!(engine.state(), GameState::Won);
    assert_eq!(engine.turn(), Mark::X);
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut engine = GameEngine::default();
    play(&mut engine, &ROW_WIN);
    let before = engine.snapshot();

    assert_eq!(engine.can_move(3, 1), Ok(false));
    assert_eq!(
        engine.make_move(3, 1),
        Err(EngineError::IllegalMove {
            row: 3,
            column: 1,
            reason: Rejection::GameOver(GameState::Won)
        })
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_four_by_four_anti_diagonal() {
    let mut engine = GameEngine::new(4).unwrap();
    play(
        &mut engine,
        &[(1, 4), (1, 1), (2, 3), (1, 2), (3, 2), (2, 2), (4, 1)],
    );
    assert_eq!(engine.state(), GameState::Won);
    assert_eq!(engine.winner(), Some(Mark::X));
    assert_eq!(engine.winning_line().map(|line| line.len()), Some(4));
}

#[test]
fn test_presentation_layer_sees_consistent_boards() {
    let mut engine = GameEngine::default();
    let boards = Rc::new(RefCell::new(Vec::<Board>::new()));
    let sink = Rc::clone(&boards);
    engine.subscribe(move |event: &GameEvent| {
        if let GameEvent::BoardChanged(change) = event {
            assert_eq!(change.changed().len(), 1);
            sink.borrow_mut().push(change.current.clone());
        }
    });

    play(&mut engine, &ROW_WIN);

    let boards = boards.borrow();
    assert_eq!(boards.len(), ROW_WIN.len());
    assert_eq!(boards.last(), Some(engine.board()));
    assert_eq!(boards[0].to_state_string(), "X        ");
}

#[test]
fn test_resume_then_finish() {
    let board: Board = "XO  X  O ".parse().unwrap();
    let mut engine = GameEngine::resume(board, Mark::X).unwrap();
    assert_eq!(engine.state(), GameState::Started);
    assert_eq!(engine.turn(), Mark::X);

    engine.make_move(3, 3).unwrap();
    assert_eq!(engine.state(), GameState::Won);
    assert_eq!(engine.winner(), Some(Mark::X));
}
