//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::App;

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            return Ok(handle_key(app, key));
        }
    }
    Ok(false)
}

/// Applies one key event to the app. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('d') => app.toggle_dark_mode(),
            KeyCode::Char('r') => app.toggle_round_up(),
            KeyCode::Char('l') => app.clear_inputs(),
            _ => {}
        }
        return !app.running;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => {
            if !app.toggle_focused() {
                app.focus_next();
            }
        }
        KeyCode::Char(' ') if !app.focus.is_text() => {
            app.toggle_focused();
        }
        KeyCode::Char('q') if !app.focus.is_text() => app.quit(),
        _ => {
            if let Some(input) = app.focused_input_mut() {
                input.handle_event(&Event::Key(key));
                debug!(value = input.value(), "field edited");
            }
        }
    }

    !app.running
}
