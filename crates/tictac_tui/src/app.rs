//! Application state and logic.

use std::time::Duration;

use crossterm::event::KeyEvent;
use tictac_core::{
    Evaluation, GameMode, GameState, MoveTicket, Position, Session, WinResult, detect_win,
};
use tracing::{debug, info, instrument};

use crate::celebration::Celebration;
use crate::input::{Action, action_for};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    celebration: Option<Celebration>,
}

impl App {
    /// Creates the app around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            celebration: None,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Win scan for the board on screen.
    pub fn win(&self) -> WinResult {
        detect_win(self.state().board())
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Confetti currently on screen, if any.
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match action_for(key) {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Control {
        match action {
            Action::Select(index) => self.select(index),
            Action::SelectCursor => self.select(self.cursor.to_index()),
            Action::Cursor(step) => self.cursor = self.cursor.step(step),
            Action::Reset => {
                info!("Board reset by user");
                self.celebration = None;
                let evaluation = self.session.reset();
                self.observe(evaluation);
            }
            Action::ToggleMode => self.switch_mode(self.state().mode().toggle()),
            Action::SetMode(mode) => self.switch_mode(mode),
            Action::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Redeems a computer-move ticket delivered by the timer.
    pub fn computer_move_due(&mut self, ticket: MoveTicket) {
        if let Some((index, evaluation)) = self.session.computer_move_due(ticket) {
            debug!(index, "Computer move shown");
            self.observe(evaluation);
        }
    }

    /// Advances animations.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(celebration) = &mut self.celebration {
            celebration.tick(dt);
            if celebration.is_finished() {
                self.celebration = None;
            }
        }
    }

    fn select(&mut self, index: usize) {
        // Rejected clicks are ignored.
        if let Ok((_, evaluation)) = self.session.select_cell(index) {
            if let Some(pos) = Position::from_index(index) {
                debug!(%pos, "Move played");
                self.cursor = pos;
            }
            self.observe(evaluation);
        }
    }

    fn switch_mode(&mut self, mode: GameMode) {
        info!(mode = mode.label(), "Mode switched");
        self.celebration = None;
        let evaluation = self.session.set_mode(mode);
        self.observe(evaluation);
    }

    fn observe(&mut self, evaluation: Evaluation) {
        if evaluation.newly_won() {
            self.celebration = Some(Celebration::new(&mut rand::rng()));
        }
    }
}
