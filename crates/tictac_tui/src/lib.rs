//! Terminal front end for tictac.
//!
//! The binary in `main.rs` owns the terminal and the event loop. Everything
//! it drives lives here so it can be exercised without a real terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod celebration;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, Control};
pub use celebration::{CELEBRATION_LENGTH, Celebration, Particle};
pub use cli::Cli;
pub use config::{ConfigError, FileConfig, Overrides, Settings};
pub use input::{Action, action_for};
pub use terminal::TerminalGuard;
