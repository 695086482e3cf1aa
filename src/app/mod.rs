//! Application module
//!
//! Contains the main application struct and event loop.
//!
//! # Module Structure
//! - `state` - Wizard state types (WizardState, WizardStep)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{WizardState, WizardStep};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::error::Result;
use crate::ui;

/// Main application struct.
///
/// Owns the wizard state exclusively; the loop is single-threaded and
/// processes one event at a time, so no locking is involved.
pub struct App {
    state: WizardState,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        debug!("creating new App instance");
        Self {
            state: WizardState::new(),
        }
    }

    /// Current wizard state (read-only).
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Run the main event loop until the user quits.
    ///
    /// The screen is redrawn after each processed event; right after each
    /// draw the displayed error (if any) is taken so it shows exactly once.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("starting wizard event loop");

        terminal.draw(|f| ui::draw(f, &self.state))?;

        loop {
            match event::read()? {
                Event::Key(key_event) => {
                    if self.handle_key_event(key_event) {
                        // Quit is immediate, with no further output.
                        break;
                    }
                    terminal.draw(|f| ui::draw(f, &self.state))?;
                    self.state.take_error();
                }
                Event::Resize(_, _) => {
                    terminal.draw(|f| ui::draw(f, &self.state))?;
                }
                _ => {}
            }
        }

        info!("wizard loop finished");
        Ok(())
    }

    /// Handle a keyboard event.
    ///
    /// Returns `true` when the application should exit. The quit and
    /// confirm signals are intercepted here; everything else goes to the
    /// text-input buffer's editing state.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("quit requested");
            return true;
        }

        match key_event.code {
            KeyCode::Enter => self.state.confirm(),
            _ => self.state.input.handle_key(key_event),
        }

        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
