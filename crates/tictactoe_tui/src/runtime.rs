//! Terminal lifecycle and the synchronous event loop.
//!
//! Every state transition happens inline in response to a single key
//! event; nothing suspends or runs concurrently. Rendering is a pure
//! projection triggered after each pass through the loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::{App, Signal};
use crate::theme::Theme;
use crate::ui;

/// Sets up the terminal, runs the game until quit, and restores the
/// terminal even when the loop errors.
pub fn run(theme: Theme) -> Result<()> {
    info!("Starting terminal session");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Draw, poll, dispatch - single-threaded and blocking.
#[instrument(skip_all)]
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with a short timeout to stay responsive to resizes.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key) == Signal::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
