//! Reasons a move can be turned away.
//!
//! A rejected move never changes the game. The front end drops these
//! silently; they exist so callers and tests can tell rejections apart.

/// Error returned when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The computer's move is pending.
    #[display("Computer is thinking")]
    ComputerThinking,
}
