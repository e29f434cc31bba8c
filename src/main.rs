//! Gridtoe - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::cli::{Cli, Command, GameArgs};
use gridtoe::{GameController, Session, load_config, parse_coords, render_view, replay, resolve};
use std::io::{self, BufWriter, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(&game),
        Command::Replay { game, json, moves } => run_replay(&game, json, &moves),
    }
}

/// Builds the game controller from config file and flags.
#[instrument(skip(args))]
fn build_game(args: &GameArgs) -> Result<GameController> {
    let config = load_config(args.config.as_deref())?;
    let config = resolve(config, args.overrides())?;
    let game = GameController::new(&config).context("Failed to create game")?;
    info!(size = game.size(), "Game created");
    Ok(game)
}

/// Run an interactive session on stdin/stdout
fn run_play(args: &GameArgs) -> Result<()> {
    let game = build_game(args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(game, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Apply moves given on the command line and print the result
fn run_replay(args: &GameArgs, json: bool, moves: &[String]) -> Result<()> {
    let mut game = build_game(args)?;
    let coords = moves
        .iter()
        .map(|m| parse_coords(m).with_context(|| format!("Invalid move '{}'", m)))
        .collect::<Result<Vec<_>>>()?;

    let skipped = replay(&mut game, &coords);

    let mut out = BufWriter::new(io::stdout().lock());
    for skip in &skipped {
        writeln!(
            out,
            "Skipped move {} ({}, {}): {}",
            skip.index + 1,
            skip.row,
            skip.col,
            skip.error
        )?;
    }
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&game.view())?)?;
    } else {
        write!(out, "{}", render_view(&game.view()))?;
    }
    out.flush()?;
    Ok(())
}
