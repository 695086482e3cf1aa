//! palletui - Main entry point
//!
//! Sets up logging and the terminal, runs the wizard, and restores the
//! terminal on the way out.

use anyhow::Context;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tracing::{error, info};

use palletui::app::App;
use palletui::cli::Cli;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use tracing_subscriber::EnvFilter;

    // Log to stderr so the alternate-screen UI on stdout stays intact.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() {
    init_logger();
    info!("palletui starting up");

    let _cli = Cli::parse_args();

    if let Err(e) = run_wizard() {
        error!("fatal: {e:#}");
        println!("Error running program: {e:#}");
        std::process::exit(1);
    }
}

/// Run the TUI wizard
fn run_wizard() -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new();
            app.run(&mut terminal).context("wizard loop failed")
        });

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}
