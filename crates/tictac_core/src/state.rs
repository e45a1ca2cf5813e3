//! Game state and its transitions.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, trace};

use crate::action::MoveError;
use crate::rules::{WinResult, detect_win, is_full};
use crate::scheduler::MoveTicket;
use crate::types::{BOARD_SIZE, Board, Cell, GameMode, Player, Score};

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player),
    /// The board is full with no line.
    Tie,
    /// Moves remain.
    InProgress,
}

/// Result of re-evaluating the board after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    win: WinResult,
    newly_won: bool,
}

impl Evaluation {
    /// The win scan for the current board.
    pub fn win(&self) -> &WinResult {
        &self.win
    }

    /// True only on the evaluation that first recorded this board's winner.
    pub fn newly_won(&self) -> bool {
        self.newly_won
    }
}

/// Complete state of a play session.
///
/// The board, whose turn it is, the mode and the running score. Score
/// survives [`GameState::reset`]; everything else about the board does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next: Player,
    mode: GameMode,
    score: Score,
    computer_thinking: bool,
    // Bumped by every reset so outstanding tickets go stale.
    generation: u64,
    win_recorded: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameState {
    /// Creates a fresh session: empty board, X to move, zero score.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            next: Player::X,
            mode,
            score: Score::default(),
            computer_thinking: false,
            generation: 0,
            win_recorded: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes down next.
    pub fn next(&self) -> Player {
        self.next
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// True while a computer move is scheduled but not yet played.
    pub fn computer_thinking(&self) -> bool {
        self.computer_thinking
    }

    /// Counter identifying the current board since launch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Places the next player's mark at `index`.
    ///
    /// Rejected when the index is off the board, the cell is taken, the
    /// board already has a winner, or the computer is about to move. A
    /// rejected move leaves the state untouched.
    #[instrument(level = "trace", skip(self), fields(next = %self.next))]
    pub fn apply_move(&mut self, index: usize) -> Result<Player, MoveError> {
        self.check_move(index)?;
        Ok(self.place(index))
    }

    fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if index >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }
        if detect_win(&self.board).winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::Computer && self.computer_thinking {
            return Err(MoveError::ComputerThinking);
        }
        Ok(())
    }

    // Callers have already checked that `index` is an empty cell on the board.
    fn place(&mut self, index: usize) -> Player {
        let player = self.next;
        self.board.cells[index] = Cell::Occupied(player);
        self.next = player.opponent();
        trace!(index, %player, "Mark placed");
        player
    }

    /// Switches mode. Always starts a fresh board.
    #[instrument(skip(self), fields(from = ?self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.reset();
        self.mode = mode;
    }

    /// Clears the board and hands the first move back to X.
    ///
    /// Score and mode are kept. Any outstanding [`MoveTicket`] is invalidated.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.next = Player::X;
        self.computer_thinking = false;
        self.win_recorded = false;
        self.generation += 1;
        debug!(generation = self.generation, "Board reset");
    }

    /// Adds a point for the winner the first time a board's win is seen.
    ///
    /// Returns true if the score changed. Calling this again for the same
    /// winning board does nothing.
    #[instrument(level = "trace", skip(self, result))]
    pub fn record_win_if_new(&mut self, result: &WinResult) -> bool {
        match result.winner() {
            Some(winner) if !self.win_recorded => {
                self.score.increment(winner);
                self.win_recorded = true;
                info!(
                    %winner,
                    x = self.score.get(Player::X),
                    o = self.score.get(Player::O),
                    "Win recorded"
                );
                true
            }
            _ => false,
        }
    }

    /// Re-evaluates the board after a state change.
    ///
    /// Records a new win and stops any computer thinking once the game is
    /// decided.
    #[instrument(level = "trace", skip(self))]
    pub fn reconcile(&mut self) -> Evaluation {
        let win = detect_win(&self.board);
        let newly_won = self.record_win_if_new(&win);
        if self.computer_thinking && (win.winner().is_some() || is_full(&self.board)) {
            debug!("Game decided while computer was thinking");
            self.computer_thinking = false;
        }
        Evaluation { win, newly_won }
    }

    /// True when the computer should be asked to play.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::Computer
            && self.next == Player::O
            && !self.computer_thinking
            && detect_win(&self.board).winner().is_none()
            && !is_full(&self.board)
    }

    /// Enters the thinking state and issues a ticket for the computer's move.
    ///
    /// Returns `None` when it is not the computer's turn or a move is
    /// already pending.
    #[instrument(level = "trace", skip(self))]
    pub fn begin_thinking(&mut self) -> Option<MoveTicket> {
        if !self.computer_to_move() {
            return None;
        }
        self.computer_thinking = true;
        Some(MoveTicket::new(self.generation))
    }

    /// Plays the computer's move for `ticket` on a uniformly random empty cell.
    ///
    /// Stale tickets, from before a reset or mode switch, are ignored.
    /// Returns the index played.
    #[instrument(skip(self, rng), fields(generation = self.generation))]
    pub fn apply_computer_move<R: Rng + ?Sized>(
        &mut self,
        ticket: MoveTicket,
        rng: &mut R,
    ) -> Option<usize> {
        if ticket.generation() != self.generation || !self.computer_thinking {
            debug!(
                ticket = ticket.generation(),
                "Discarding stale computer move"
            );
            return None;
        }
        self.computer_thinking = false;
        let empty = self.board.empty_cells();
        let index = *empty.choose(rng)?;
        self.place(index);
        debug!(index, "Computer moved");
        Some(index)
    }

    /// Where the current game stands.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = detect_win(&self.board).winner() {
            Outcome::Winner(winner)
        } else if is_full(&self.board) {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// One-line status for display.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Winner(player) => format!("Winner: {}", player),
            Outcome::Tie => "It's a tie!".to_string(),
            Outcome::InProgress if self.computer_thinking => {
                "Computer is thinking…".to_string()
            }
            Outcome::InProgress => format!("Next Player: {}", self.next),
        }
    }
}
