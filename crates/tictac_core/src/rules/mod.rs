//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the game state so the state machine and the front end can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LineKind, WinResult, WinningLine, detect_win};
