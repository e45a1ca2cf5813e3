//! Stateless UI rendering.

mod board;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, center_rect, render_board};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{GameMode, Player};

use crate::app::App;
use crate::celebration::Celebration;

const HELP: &str = "1-9/arrows+Enter: move  r: reset  m: switch mode  q: quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and score
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_board(
        frame,
        chunks[1],
        app.state().board(),
        app.cursor(),
        &app.win(),
    );
    render_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(celebration) = app.celebration() {
        render_confetti(frame.buffer_mut(), area, celebration);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.state().score();
    let mode_color = match app.state().mode() {
        GameMode::Human => Color::Cyan,
        GameMode::Computer => Color::Magenta,
    };

    let line = Line::from(vec![
        Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Score  "),
        Span::styled(
            format!("X: {}", score.get(Player::X)),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("  "),
        Span::styled(
            format!("O: {}", score.get(Player::O)),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            app.state().mode().label(),
            Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let color = if app.win().winner().is_some() {
        Color::Green
    } else if app.state().computer_thinking() {
        Color::Magenta
    } else {
        Color::Yellow
    };

    let status = Paragraph::new(app.state().status_text())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Paints visible confetti particles straight into the buffer.
fn render_confetti(buf: &mut Buffer, area: Rect, celebration: &Celebration) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let t = celebration.seconds();
    for particle in celebration.particles() {
        let Some((x, y)) = particle.position_at(t) else {
            continue;
        };
        let col = ((x * area.width as f32) as u16).min(area.width - 1);
        let row = ((y * area.height as f32) as u16).min(area.height - 1);
        if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
            cell.set_char(particle.glyph())
                .set_style(Style::default().fg(particle.color()));
        }
    }
}
