//! Main TUI application
//!
//! [`SelectorApp`] owns the [`Session`] and turns user actions into session
//! transitions. Probes run on tokio tasks; their attempts come back over a
//! channel and are applied on the render loop, so the session is only ever
//! touched from one place.

use super::events::{Action, EventLoop, TuiEvent};
use super::notifications::{NotificationKind, NotificationManager};
use super::terminal::TerminalManager;
use super::views;
use crate::resolver::Resolver;
use crate::session::{Completion, Session, SessionError};
use crate::types::{DisplayMode, Outcome, ResolutionAttempt};
use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Running normally
    Running,
    /// Quit requested
    Quitting,
}

/// Selector state and behavior, independent of the terminal
pub struct SelectorApp {
    session: Session,
    resolver: Resolver,
    notices: NotificationManager,
    attempts_tx: UnboundedSender<ResolutionAttempt>,
    attempts_rx: UnboundedReceiver<ResolutionAttempt>,
    state: AppState,
}

impl SelectorApp {
    pub fn new(resolver: Resolver, mode: DisplayMode) -> Self {
        let (attempts_tx, attempts_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(mode),
            resolver,
            notices: NotificationManager::new(),
            attempts_tx,
            attempts_rx,
            state: AppState::Running,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notices(&self) -> &NotificationManager {
        &self.notices
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Apply one user action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Insert(c) => self.session.push_char(c),
            Action::Backspace => self.session.pop_char(),
            Action::ToggleMode => {
                self.session.toggle_mode();
            }
            Action::Submit => self.submit(),
            Action::Quit => self.state = AppState::Quitting,
        }
    }

    /// Start a resolution for the current input on a background task
    fn submit(&mut self) {
        let pending = match self.session.begin_submit() {
            Ok(pending) => pending,
            Err(SessionError::Busy(raw_input)) => {
                self.notices.notify(
                    NotificationKind::Info,
                    format!("Still checking \"{}\"", raw_input),
                );
                return;
            }
        };

        debug!("Submitting '{}'", pending.raw_input);
        let resolver = self.resolver.clone();
        let tx = self.attempts_tx.clone();
        tokio::spawn(async move {
            let attempt = resolver.resolve(&pending.raw_input).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(attempt);
        });
    }

    /// Apply finished resolutions. Returns how many were applied.
    pub fn drain_attempts(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(attempt) = self.attempts_rx.try_recv() {
            self.apply_attempt(attempt);
            applied += 1;
        }
        applied
    }

    /// Wait for the next finished resolution and apply it
    pub async fn next_attempt(&mut self) -> Option<Completion> {
        let attempt = self.attempts_rx.recv().await?;
        Some(self.apply_attempt(attempt))
    }

    fn apply_attempt(&mut self, attempt: ResolutionAttempt) -> Completion {
        let key = attempt.normalized_key.clone();
        let transient = match &attempt.outcome {
            Outcome::NotFound(cause) => cause.is_transient(),
            Outcome::Found(_) => false,
        };

        let completion = self.session.complete(attempt);
        match completion {
            Completion::Added => {
                info!("Added '{}'", key);
                self.notices
                    .notify(NotificationKind::Success, format!("Added {}", key));
            }
            Completion::AlreadyPresent => {
                self.notices.notify(
                    NotificationKind::Info,
                    format!("{} is already in the list", key),
                );
            }
            Completion::Failed if transient => {
                self.notices.notify(
                    NotificationKind::Warning,
                    "Network problem, press Enter to retry",
                );
            }
            Completion::Failed | Completion::Discarded => {}
        }
        completion
    }

    /// Expire old notices
    pub fn tick(&mut self) {
        self.notices.tick();
    }
}

/// Run the interactive selector until the user quits
pub async fn run(resolver: Resolver, mode: DisplayMode) -> Result<()> {
    let mut app = SelectorApp::new(resolver, mode);
    let mut terminal = TerminalManager::new()?;
    let event_loop = EventLoop::default();

    info!("Selector started in {} mode", mode);

    loop {
        app.drain_attempts();
        app.tick();

        terminal
            .terminal_mut()
            .draw(|frame| views::draw(frame, app.session(), app.notices()))?;

        match event_loop.poll_event()? {
            TuiEvent::Quit => app.handle_action(Action::Quit),
            TuiEvent::Key(key) => {
                if let Some(action) = Action::from_key(&key) {
                    app.handle_action(action);
                }
            }
            TuiEvent::Resize(w, h) => debug!("Resized to {}x{}", w, h),
            TuiEvent::Tick => {}
        }

        if app.state() == AppState::Quitting {
            break;
        }

        // Let probe tasks make progress between polls
        tokio::task::yield_now().await;
    }

    info!(
        "Selector closed with {} entries",
        app.session().collection().len()
    );
    Ok(())
}
