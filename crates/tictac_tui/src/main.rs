//! Tic-tac-toe in the terminal.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tictac_core::{MoveTicket, Session};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tictac_tui::{App, Cli, Control, FileConfig, Settings, TerminalGuard, ui};

const FRAME: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let file = FileConfig::load_or_default(&cli.config)?;
    let settings = Settings::resolve(file, cli.overrides());

    // Log to a file so output does not tear the terminal.
    let log_file = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        mode = settings.mode().label(),
        delay_ms = settings.computer_delay().as_millis() as u64,
        seed = ?settings.seed(),
        "Starting tictac"
    );

    let (session, mut tickets) = Session::new(
        *settings.mode(),
        *settings.computer_delay(),
        *settings.seed(),
    );
    let app = App::new(session);

    // Dropping the guard on any early return puts the terminal back.
    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &mut tickets).await;

    guard.restore()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Exiting tictac");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tickets: &mut mpsc::UnboundedReceiver<MoveTicket>,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Tickets from the computer timer
        while let Ok(ticket) = tickets.try_recv() {
            app.computer_move_due(ticket);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_frame));
        last_frame = now;

        // Polling blocks, so hand the worker back to the runtime meanwhile.
        if tokio::task::block_in_place(|| event::poll(FRAME))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}
