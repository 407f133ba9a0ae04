//! Command-line interface for squaretoe.

use clap::Parser;

/// Squaretoe - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "squaretoe")]
#[command(about = "Play N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,
}
