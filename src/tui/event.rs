//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FitshiftError;
use crate::tui::app::Action;

/// Wait up to `timeout` for a key press.
///
/// Returns the decoded action, or None if no relevant key arrived.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration) -> Result<Option<Action>, FitshiftError> {
    if !event::poll(timeout)
        .map_err(|e| FitshiftError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FitshiftError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Navigation - vim style
        KeyCode::Char('k') | KeyCode::Up => Action::Up,
        KeyCode::Char('j') | KeyCode::Down => Action::Down,
        KeyCode::Char('h') | KeyCode::Left => Action::Left,
        KeyCode::Char('l') | KeyCode::Right => Action::Right,

        KeyCode::Enter => Action::Confirm,
        KeyCode::Char(' ') => Action::TogglePause,
        KeyCode::Char('s') => Action::Skip,
        KeyCode::Char('y') => Action::Yes,
        KeyCode::Char('n') => Action::No,

        _ => return None,
    };

    Some(action)
}
