//! Command-line interface for tictac.

use std::path::PathBuf;

use clap::Parser;
use tictac_core::GameMode;

use crate::config::Overrides;

/// Tic-tac-toe in the terminal, against a friend or a random computer.
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent at launch: human or computer
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Milliseconds the computer waits before moving
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Values that override the settings file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            delay_ms: self.delay_ms,
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}
