//! Short-lived notices shown in the status bar
//!
//! Notices report what the last submit did ("Added twitter", "busy", a
//! network hint). The resolution error itself lives in the session and is
//! never expired here.

use super::theme::Palette;
use crate::icons::icons;
use ratatui::style::Color;
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(4);

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn color(&self, palette: &Palette) -> Color {
        match self {
            NotificationKind::Info => palette.accent,
            NotificationKind::Success => palette.success,
            NotificationKind::Warning => palette.warning,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => icons().pending,
            NotificationKind::Success => icons().success,
            NotificationKind::Warning => icons().error,
        }
    }
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: Instant,
    pub ttl: Duration,
}

/// Holds the latest notice until it expires
#[derive(Debug, Default)]
pub struct NotificationManager {
    current: Option<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notice
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            timestamp: Instant::now(),
            ttl: DEFAULT_TTL,
        });
    }

    /// Drop the notice once its ttl has passed
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(n) = &self.current {
            if now.duration_since(n.timestamp) >= n.ttl {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
