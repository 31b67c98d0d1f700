//! Terminal UI for the selector
//!
//! This module contains:
//! - Terminal setup and management
//! - Event handling and key mapping
//! - Light/dark palettes
//! - Widgets and screen layout
//! - The application loop

mod app;
mod events;
mod notifications;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{run, AppState, SelectorApp};
pub use events::{Action, EventLoop, TuiEvent};
pub use notifications::{Notification, NotificationKind, NotificationManager};
pub use terminal::TerminalManager;
pub use theme::Palette;
pub use views::{draw, APP_TITLE};
