//! Terminal User Interface module
//!
//! Pattern input on top, highlighted text beside the match list, status bar below

pub mod app;
pub mod events;
pub mod text_view;
pub mod ui;

pub use app::App;
pub use ui::MatchListArea;

use crate::constants::EVENT_POLL_MS;
use crate::logging::{debug_log, error_log};
use crate::{RegexplorerError, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use events::EventHandler;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interface until the user quits; the terminal is restored on every exit path
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app);
    let restored = restore_terminal(&mut terminal);

    if let Err(e) = &result {
        error_log(&format!("Event loop failed: {}", e.status_message()));
    }
    result.and(restored)
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| RegexplorerError::terminal_error(&e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| RegexplorerError::terminal_error(&e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| RegexplorerError::terminal_error(&e.to_string()))
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| RegexplorerError::terminal_error(&e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| RegexplorerError::terminal_error(&e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| RegexplorerError::terminal_error(&e.to_string()))
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let handler = EventHandler::new()?;
    let timeout = Duration::from_millis(EVENT_POLL_MS);

    loop {
        app.sync_view();
        draw(terminal, app)?;

        // Scroll only once the new document has been laid out
        if app.flush_scrolls() {
            draw(terminal, app)?;
        }

        if app.should_quit {
            debug_log("Quit requested");
            return Ok(());
        }

        match handler.next_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let action = handler.handle_key_event(key, app.focus);
                app.handle_key_action(action);
            }
            Some(Event::Mouse(mouse)) => {
                let action = handler.handle_mouse_event(mouse);
                app.handle_mouse_action(action);
            }
            _ => {}
        }
    }
}

fn draw(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal
        .draw(|frame| ui::draw(frame, app))
        .map(|_| ())
        .map_err(|e| RegexplorerError::TuiError(format!("Draw failed: {}", e)))
}
