//! Event handling system
//!
//! Raw crossterm events become [`TuiEvent`]s, and key presses are mapped to
//! the selector's [`Action`]s. The submit button of a pointer UI and the
//! Enter key are the same action here.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI events
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Key press event
    Key(KeyEvent),

    /// Window resize event
    Resize(u16, u16),

    /// Tick event (periodic update)
    Tick,

    /// Quit event
    Quit,
}

/// What the user asked the selector to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the input
    Insert(char),
    /// Delete the last input character
    Backspace,
    /// Resolve the current input
    Submit,
    /// Switch between light and dark
    ToggleMode,
    Quit,
}

impl Action {
    /// Map a key press to an action, if it has one
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Some(Action::Submit),
            (KeyCode::Esc, _) => Some(Action::Quit),
            (KeyCode::Backspace, _) => Some(Action::Backspace),
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => Some(Action::ToggleMode),
            (KeyCode::Char(c), modifiers)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::Insert(c))
            }
            _ => None,
        }
    }
}

/// Event loop for TUI applications
pub struct EventLoop {
    /// Tick rate in milliseconds
    tick_rate: u64,
}

impl EventLoop {
    /// Create new event loop
    pub fn new(tick_rate: u64) -> Self {
        Self { tick_rate }
    }

    /// Poll for next event, yielding a tick when nothing arrives in time
    pub fn poll_event(&self) -> Result<TuiEvent> {
        if event::poll(Duration::from_millis(self.tick_rate))? {
            match event::read()? {
                Event::Key(key) => {
                    if Self::is_quit_key(&key) {
                        return Ok(TuiEvent::Quit);
                    }
                    return Ok(TuiEvent::Key(key));
                }
                Event::Resize(w, h) => {
                    return Ok(TuiEvent::Resize(w, h));
                }
                _ => {}
            }
        }

        Ok(TuiEvent::Tick)
    }

    /// Check if key event is a quit shortcut
    fn is_quit_key(key: &KeyEvent) -> bool {
        // Ctrl+C or Ctrl+Q
        matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('q'), KeyModifiers::CONTROL)
        )
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(50) // 50ms tick rate
    }
}
