//! Session controller: one entry point per user event.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::action::MoveError;
use crate::scheduler::{ComputerScheduler, MoveTicket};
use crate::state::{Evaluation, GameState};
use crate::types::{GameMode, Player};

/// Owns the game state, the computer-move timer and the random source.
///
/// Every method applies one transition, re-evaluates the board, and arms
/// the timer if the computer is now to move. Due tickets come back through
/// the receiver handed out by [`Session::new`] and are redeemed with
/// [`Session::computer_move_due`].
#[derive(Debug)]
pub struct Session {
    state: GameState,
    scheduler: ComputerScheduler,
    rng: StdRng,
}

impl Session {
    /// Creates a session and the receiver for its computer-move tickets.
    ///
    /// Pass a seed for reproducible computer moves; `None` seeds from the OS.
    #[instrument]
    pub fn new(
        mode: GameMode,
        delay: Duration,
        seed: Option<u64>,
    ) -> (Self, mpsc::UnboundedReceiver<MoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = Self {
            state: GameState::new(mode),
            scheduler: ComputerScheduler::new(delay, tx),
            rng,
        };
        (session, rx)
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True while a computer move is waiting on its timer.
    pub fn move_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Human plays the cell at `index`.
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<(Player, Evaluation), MoveError> {
        let player = self.state.apply_move(index)?;
        Ok((player, self.settle()))
    }

    /// Switches mode, starting a fresh board.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Evaluation {
        self.scheduler.cancel();
        self.state.set_mode(mode);
        self.settle()
    }

    /// Clears the board, keeping score and mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Evaluation {
        self.scheduler.cancel();
        self.state.reset();
        self.settle()
    }

    /// Redeems a ticket delivered by the timer.
    ///
    /// Returns `None` when the ticket is stale and nothing was played.
    #[instrument(skip(self))]
    pub fn computer_move_due(&mut self, ticket: MoveTicket) -> Option<(usize, Evaluation)> {
        let index = self.state.apply_computer_move(ticket, &mut self.rng)?;
        self.scheduler.clear();
        Some((index, self.settle()))
    }

    fn settle(&mut self) -> Evaluation {
        let evaluation = self.state.reconcile();
        if !self.state.computer_thinking() {
            self.scheduler.cancel();
        }
        if let Some(ticket) = self.state.begin_thinking() {
            debug!("Computer to move");
            self.scheduler.schedule(ticket);
        }
        evaluation
    }
}
