//! App behaviour and rendering tests against a headless backend.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, style::Color};
use tictac_core::{GameMode, MoveTicket, Player, Position, Session};
use tokio::sync::mpsc::UnboundedReceiver;
use tictac_tui::{Action, App, CELEBRATION_LENGTH, Control, ui};

type Tickets = UnboundedReceiver<MoveTicket>;

fn new_app(mode: GameMode, delay: Duration) -> (App, Tickets) {
    let (session, tickets) = Session::new(mode, delay, Some(7));
    (App::new(session), tickets)
}

fn press(app: &mut App, c: char) -> Control {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_digit_keys_play_and_win_starts_confetti() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    for key in ['1', '2', '5', '3', '9'] {
        assert_eq!(press(&mut app, key), Control::Continue);
    }

    assert_eq!(app.win().winner(), Some(Player::X));
    assert_eq!(app.state().score().get(Player::X), 1);
    assert!(app.celebration().is_some());
    assert_eq!(app.cursor(), Position::BottomRight);

    app.tick(CELEBRATION_LENGTH);
    let text = screen(&app);
    assert!(text.contains("Winner: X"));
}

#[tokio::test]
async fn test_winning_line_is_highlighted() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    // X takes the main diagonal; O's marks stay unhighlighted.
    for key in ['1', '2', '5', '3', '9'] {
        press(&mut app, key);
    }
    app.tick(CELEBRATION_LENGTH);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();
    let highlighted = |mark: &str| {
        buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == mark && cell.bg == Color::Green)
            .count()
    };
    assert_eq!(highlighted("X"), 3);
    assert_eq!(highlighted("O"), 0);
}

#[tokio::test]
async fn test_confetti_expires() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    for key in ['1', '2', '5', '3', '9'] {
        press(&mut app, key);
    }
    app.tick(CELEBRATION_LENGTH / 2);
    assert!(app.celebration().is_some());
    app.tick(CELEBRATION_LENGTH);
    assert!(app.celebration().is_none());
}

#[tokio::test]
async fn test_reset_keeps_score_and_clears_board() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    for key in ['1', '2', '5', '3', '9'] {
        press(&mut app, key);
    }
    press(&mut app, 'r');

    assert!(app.state().board().is_clear());
    assert_eq!(app.state().next(), Player::X);
    assert_eq!(app.state().score().get(Player::X), 1);
    assert!(app.celebration().is_none());
}

#[tokio::test]
async fn test_cursor_moves_and_selects() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    assert_eq!(app.cursor(), Position::TopLeft);

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.state().board().get(0).and_then(|c| c.player()), Some(Player::X));
    assert_eq!(app.state().next(), Player::O);
}

#[tokio::test]
async fn test_occupied_cell_is_ignored() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    press(&mut app, '5');
    press(&mut app, '5');
    assert_eq!(app.state().next(), Player::O);
    assert_eq!(app.state().board().empty_cells().len(), 8);
}

#[tokio::test]
async fn test_computer_replies_after_ticket() {
    let (mut app, mut tickets) = new_app(GameMode::Computer, Duration::from_millis(5));
    press(&mut app, '5');
    assert!(app.state().computer_thinking());
    assert!(screen(&app).contains("Computer is thinking"));

    // Human input is refused while the computer thinks.
    press(&mut app, '1');
    assert_eq!(app.state().board().empty_cells().len(), 8);

    let ticket = tickets.recv().await.unwrap();
    app.computer_move_due(ticket);
    assert!(!app.state().computer_thinking());
    assert_eq!(app.state().next(), Player::X);
    assert_eq!(app.state().board().empty_cells().len(), 7);
}

#[tokio::test]
async fn test_mode_toggle_resets_board() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    press(&mut app, '5');
    assert_eq!(app.apply(Action::ToggleMode), Control::Continue);

    assert_eq!(app.state().mode(), GameMode::Computer);
    assert!(app.state().board().is_clear());
    assert!(screen(&app).contains("Vs Computer"));

    press(&mut app, 'h');
    assert_eq!(app.state().mode(), GameMode::Human);
}

#[tokio::test]
async fn test_quit_keys() {
    let (mut app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    assert_eq!(press(&mut app, 'q'), Control::Quit);
    assert_eq!(
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        Control::Quit
    );
}

#[tokio::test]
async fn test_fresh_screen_shows_score_and_status() {
    let (app, _tickets) = new_app(GameMode::Human, Duration::from_millis(10));
    let text = screen(&app);
    assert!(text.contains("Next Player: X"));
    assert!(text.contains("X: 0"));
    assert!(text.contains("O: 0"));
    assert!(text.contains("Vs Human"));
}
