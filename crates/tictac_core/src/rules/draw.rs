//! Tie detection logic for tic-tac-toe.

use super::win::detect_win;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no complete line.
#[instrument(level = "trace", skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && detect_win(board).winner().is_none()
}
