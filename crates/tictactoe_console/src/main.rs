//! Tic-tac-toe console
//!
//! Terminal presentation layer over the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod input;
mod session;
mod view;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use input::{parse_coordinate, parse_input};
use session::{Reply, handle};
use std::io::{self, BufRead, Write};
use tictactoe_engine::{EngineConfig, GameEngine, GameState};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use view::TerminalView;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Reads the config file if given, then applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_board_size(size);
    }
    config.validate()?;
    Ok(config)
}

/// Interactive game on stdin/stdout.
fn run_play(config: &EngineConfig) -> Result<()> {
    let mut engine = GameEngine::with_config(config)?;
    info!(size = engine.size(), "Starting interactive game");

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", input::HELP)?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", engine.board())?;
    writeln!(stdout)?;
    writeln!(stdout, "Player {} to move", engine.turn())?;

    engine.subscribe(TerminalView::new(engine.turn(), io::stdout()));

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match parse_input(&line) {
            Ok(input) => handle(&mut engine, input),
            Err(e) => Reply::Continue(Some(e.to_string())),
        };
        match reply {
            Reply::Continue(Some(message)) => writeln!(stdout, "{}", message)?,
            Reply::Continue(None) => {}
            Reply::Quit => break,
        }
    }

    info!("Leaving interactive game");
    Ok(())
}

/// Applies moves non-interactively and prints the outcome.
fn run_replay(config: &EngineConfig, moves: &[String], json: bool) -> Result<()> {
    let mut engine = GameEngine::with_config(config)?;

    for text in moves {
        let Some(at) = parse_coordinate(text) else {
            bail!("Invalid move {:?}; expected row,col", text);
        };
        engine
            .make_move(at.row, at.column)
            .with_context(|| format!("Move {} rejected", at))?;
    }

    let mut stdout = io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&engine.snapshot())?)?;
        return Ok(());
    }

    writeln!(stdout, "{}", engine.board())?;
    writeln!(stdout)?;
    match engine.state() {
        GameState::Won => writeln!(stdout, "Player {} Won!", engine.turn())?,
        GameState::Tied => writeln!(stdout, "Game Tied")?,
        GameState::Empty | GameState::Started => {
            writeln!(stdout, "Player {} to move", engine.turn())?
        }
    }
    Ok(())
}
