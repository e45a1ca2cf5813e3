//! Delayed computer moves.
//!
//! When it is the computer's turn the [`GameState`](crate::GameState) issues a
//! [`MoveTicket`] stamped with its current generation. The
//! [`ComputerScheduler`] holds the ticket back for a fixed delay and then
//! delivers it over a channel to whoever owns the game. Resetting or
//! switching mode aborts the pending timer and bumps the generation, so a
//! ticket that slips through anyway is rejected when it is redeemed.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, instrument, warn};

/// Delay before the computer plays.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(700);

/// Permission to play one computer move in a specific game generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTicket {
    generation: u64,
}

impl MoveTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Generation of the game this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One-shot timer that delivers [`MoveTicket`]s after a delay.
#[derive(Debug)]
pub struct ComputerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<MoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Creates a scheduler that sends due tickets on `tx`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<MoveTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer for `ticket`, replacing any timer already pending.
    ///
    /// Outside a tokio runtime there is no timer to arm, so the ticket is
    /// sent straight away.
    #[instrument(skip(self), fields(delay_ms = self.delay().as_millis() as u64))]
    pub fn schedule(&mut self, ticket: MoveTicket) {
        self.cancel();
        let tx = self.tx.clone();
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "No tokio runtime, computer move sent without delay");
                if tx.send(ticket).is_err() {
                    debug!("Ticket receiver dropped, computer move discarded");
                }
                return;
            }
        };
        let deadline = Instant::now() + self.delay();
        debug!(generation = ticket.generation, "Computer move scheduled");
        self.pending = Some(handle.spawn(async move {
            sleep_until(deadline).await;
            if tx.send(ticket).is_err() {
                debug!("Ticket receiver dropped, computer move discarded");
            }
        }));
    }

    /// Aborts the pending timer, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Pending computer move cancelled");
            handle.abort();
        }
    }

    /// Forgets the pending timer once its ticket has been redeemed.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// True while a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
