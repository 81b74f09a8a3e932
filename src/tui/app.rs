//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::config::Config;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key, handle_paste};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App, loading persisted note, bookmarks and clock
    /// preferences from the configured data directory.
    pub fn new(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state: AppState::new(config, clipboard),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);
        info!(tick_ms = tick_rate.as_millis() as u64, "tui started");

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Paste(text)) => handle_paste(&mut self.state, &text),
                Ok(Event::Resize) => {}
                Err(_) => {
                    warn!("event channel closed");
                    self.should_quit = true;
                }
            }
            // Keystrokes can starve ticks, so timers advance after every event.
            self.state.tick(Instant::now());

            if self.should_quit {
                break;
            }
        }

        // Pending note edits are written before leaving.
        self.state.notes.flush(Instant::now());

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        info!("tui stopped");
        Ok(())
    }
}
