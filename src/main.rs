//! Squaretoe - terminal front end
//!
//! Reads one command per line: a square label (`5`), a `row col` pair
//! (`2 3`), `reset`, or `quit`. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use squaretoe::{BoardAdapter, BoardEngine, GameConfig, Position, UiEvent};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_side(size);
    }
    config.validate()?;

    initialize_tracing(&config);

    let engine = BoardEngine::with_side(*config.side())?;
    run(BoardAdapter::new(engine))
}

#[instrument(skip(config))]
fn initialize_tracing(config: &GameConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}

/// Runs the read-eval-render loop until `quit` or end of input.
#[instrument(skip(adapter), fields(side = adapter.board().side()))]
fn run(mut adapter: BoardAdapter) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    render(&mut stdout, &adapter)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        let event = match command {
            "" => continue,
            "quit" | "q" => break,
            "reset" | "r" => UiEvent::Reset,
            input => match Position::parse(input, adapter.board().side())
                .and_then(|pos| pos.to_index(adapter.board().side()))
            {
                Some(index) => UiEvent::Activate(index),
                None => {
                    warn!(input, "Unrecognized command");
                    writeln!(stdout, "Enter a square number, `row col`, `reset`, or `quit`.")?;
                    continue;
                }
            },
        };

        if let Err(error) = adapter.handle(event) {
            writeln!(stdout, "{}", error)?;
        }
        render(&mut stdout, &adapter)?;
    }

    info!("Exiting");
    Ok(())
}

fn render(out: &mut impl Write, adapter: &BoardAdapter) -> Result<()> {
    writeln!(out, "{}\n", adapter.render())?;
    if adapter.result().is_none() {
        writeln!(out, "{} to move:", adapter.current_turn())?;
    }
    out.flush()?;
    Ok(())
}
