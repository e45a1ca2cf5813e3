//! Raw mode and alternate screen, undone however the app exits.

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen until restored
/// or dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    ///
    /// If switching screens fails, raw mode is turned back off before the
    /// error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal entered");
        Ok(guard)
    }

    /// True until the terminal has been restored.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leaves raw mode and the alternate screen and shows the cursor.
    ///
    /// Every step is attempted even if an earlier one fails; the first
    /// error is returned. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        debug!("Terminal restored");
        raw.and(screen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
