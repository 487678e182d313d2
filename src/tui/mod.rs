//! Terminal User Interface (TUI) for fitshift.
//!
//! Runs workouts interactively: a setup screen, the workout itself with
//! countdowns and timers, and a summary. Leaving a workout goes back to
//! setup when the app was opened there. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{Action, App, Screen, SetupChoice};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::FitshiftError;
use crate::workout::WorkoutSummary;

const TICK: Duration = Duration::from_secs(1);
const POLL: Duration = Duration::from_millis(100);

/// Run the TUI until the user leaves it.
///
/// Returns the summary if a workout was completed.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(mut app: App) -> Result<Option<WorkoutSummary>, FitshiftError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FitshiftError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FitshiftError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FitshiftError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.into_outcome())
}

/// Run the main application loop.
///
/// Input is polled every 100ms; the workout advances once per elapsed second.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FitshiftError> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FitshiftError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::next_action(POLL)? {
            app.apply(action);
        }

        if matches!(app.screen, Screen::Workout(_)) {
            while last_tick.elapsed() >= TICK {
                last_tick += TICK;
                app.on_tick();
            }
        } else {
            last_tick = Instant::now();
        }
    }

    Ok(())
}
