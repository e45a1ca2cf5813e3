//! Tic-tac-toe game logic: board state, win detection and a delayed
//! random computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`GameMode`], [`Score`]
//! - **Rules**: [`detect_win`], [`is_full`], [`is_tie`]
//! - **State**: [`GameState`] and its transitions
//! - **Scheduler**: [`ComputerScheduler`] delivers generation-stamped
//!   [`MoveTicket`]s after a delay
//! - **Session**: [`Session`] wires the three together per user event
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameState, Player, detect_win};
//!
//! let mut state = GameState::default();
//! for index in [0, 1, 4, 2, 8] {
//!     state.apply_move(index).unwrap();
//! }
//! let result = detect_win(state.board());
//! assert_eq!(result.winner(), Some(Player::X));
//! assert_eq!(result.cells(), &[0, 4, 8]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod scheduler;
mod session;
mod state;
mod types;

pub use action::MoveError;
pub use position::{Position, Step};
pub use rules::{LineKind, WinResult, WinningLine, detect_win, is_full, is_tie};
pub use scheduler::{ComputerScheduler, DEFAULT_COMPUTER_DELAY, MoveTicket};
pub use session::Session;
pub use state::{Evaluation, GameState, Outcome};
pub use types::{BOARD_SIZE, Board, Cell, GameMode, Player, Score};
