//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictac_core::{GameMode, Step};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the cell with this board index.
    Select(usize),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Move the cursor one cell.
    Cursor(Step),
    /// Clear the board.
    Reset,
    /// Flip between vs-human and vs-computer.
    ToggleMode,
    /// Switch to a specific mode.
    SetMode(GameMode),
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Select(digit as usize - 1)),
        KeyCode::Up => Some(Action::Cursor(Step::Up)),
        KeyCode::Down => Some(Action::Cursor(Step::Down)),
        KeyCode::Left => Some(Action::Cursor(Step::Left)),
        KeyCode::Right => Some(Action::Cursor(Step::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Tab => Some(Action::ToggleMode),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::SetMode(GameMode::Human)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::SetMode(GameMode::Computer)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
