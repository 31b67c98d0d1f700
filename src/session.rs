//! Interaction state machine
//!
//! A [`Session`] owns everything the display shell renders: the collection,
//! the error slot, the raw input and the display mode. It only changes
//! through the transition methods below.
//!
//! ```text
//! Idle --begin_submit--> Resolving --complete(Found)----> Idle (input cleared, error cleared)
//!                                  --complete(NotFound)-> Idle (input kept, error set)
//! ```
//!
//! A submit while `Resolving` is rejected with [`SessionError::Busy`], so at
//! most one probe is ever in flight.

use crate::collection::Collection;
use crate::error::IconNotResolvable;
use crate::resolver::{normalize, Resolver};
use crate::types::{DisplayMode, Entry, Outcome, ResolutionAttempt};
use thiserror::Error;
use tracing::{debug, warn};

/// Transition errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A resolution is already in flight
    #[error("A resolution for \"{0}\" is already in progress")]
    Busy(String),
}

/// Where the session is in the submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Resolving { raw_input: String },
}

/// Work handed out by [`Session::begin_submit`]
///
/// The caller runs the probe for `raw_input` and feeds the attempt back
/// through [`Session::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolution {
    pub raw_input: String,
    pub normalized_key: String,
}

/// What [`Session::complete`] did with an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Icon found and appended
    Added,
    /// Icon found but the name was already listed
    AlreadyPresent,
    /// Icon not found, error slot set
    Failed,
    /// Attempt did not match the pending resolution and was dropped
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    collection: Collection,
    error: Option<IconNotResolvable>,
    mode: DisplayMode,
    phase: Phase,
}

impl Session {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    // === Read state ===

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Current user-facing error, if the last attempt failed
    pub fn error(&self) -> Option<&IconNotResolvable> {
        self.error.as_ref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, Phase::Resolving { .. })
    }

    // === Transitions ===

    /// Replace the raw input. Ignored while resolving.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.is_resolving() {
            self.input = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_resolving() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_resolving() {
            self.input.pop();
        }
    }

    /// Flip between light and dark. Allowed in any phase.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        debug!("Display mode: {}", self.mode);
        self.mode
    }

    /// Idle → Resolving for the current input.
    ///
    /// Any input is accepted, including the empty string.
    pub fn begin_submit(&mut self) -> Result<PendingResolution, SessionError> {
        if let Phase::Resolving { raw_input } = &self.phase {
            debug!("Rejecting submit, still resolving '{}'", raw_input);
            return Err(SessionError::Busy(raw_input.clone()));
        }

        let raw_input = self.input.clone();
        self.phase = Phase::Resolving {
            raw_input: raw_input.clone(),
        };

        Ok(PendingResolution {
            normalized_key: normalize(&raw_input),
            raw_input,
        })
    }

    /// Resolving → Idle, applying the attempt's outcome.
    pub fn complete(&mut self, attempt: ResolutionAttempt) -> Completion {
        match &self.phase {
            Phase::Resolving { raw_input } if *raw_input == attempt.raw_input => {}
            _ => {
                warn!(
                    "Discarding attempt for '{}' that is not pending",
                    attempt.raw_input
                );
                return Completion::Discarded;
            }
        }
        self.phase = Phase::Idle;

        match attempt.outcome {
            Outcome::Found(icon_ref) => {
                let added = self
                    .collection
                    .insert_if_absent(Entry::new(&attempt.normalized_key, icon_ref));
                self.input.clear();
                self.error = None;
                if added {
                    Completion::Added
                } else {
                    Completion::AlreadyPresent
                }
            }
            Outcome::NotFound(cause) => {
                if cause.is_transient() {
                    warn!("Probe for '{}' failed: {}", attempt.raw_input, cause);
                }
                self.error = Some(IconNotResolvable::new(attempt.raw_input, cause));
                Completion::Failed
            }
        }
    }

    /// Run a full submit cycle against `resolver`.
    ///
    /// Cancel-safe: dropping the future mid-probe returns the session to
    /// `Idle` with the input and error untouched.
    pub async fn submit(&mut self, resolver: &Resolver) -> Result<Completion, SessionError> {
        let pending = self.begin_submit()?;
        let guard = PendingGuard { session: self };
        let attempt = resolver.resolve(&pending.raw_input).await;
        Ok(guard.session.complete(attempt))
    }
}

/// Puts an abandoned `Resolving` session back to `Idle`
struct PendingGuard<'a> {
    session: &'a mut Session,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if let Phase::Resolving { raw_input } = &self.session.phase {
            debug!("Resolution of '{}' abandoned", raw_input);
            self.session.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CdnSettings;
    use crate::error::ProbeFailure;
    use crate::resolver::IconLocator;
    use crate::services::probe::MockIconProbe;
    use crate::types::IconRef;
    use std::sync::Arc;

    const ICONS: &str = "https://cdn.jsdelivr.net/npm/simple-icons@latest/icons";

    fn found(raw: &str) -> ResolutionAttempt {
        let key = normalize(raw);
        ResolutionAttempt {
            raw_input: raw.to_string(),
            outcome: Outcome::Found(IconRef::new(format!("{}/{}.svg", ICONS, key))),
            normalized_key: key,
        }
    }

    fn missing(raw: &str) -> ResolutionAttempt {
        ResolutionAttempt {
            raw_input: raw.to_string(),
            normalized_key: normalize(raw),
            outcome: Outcome::NotFound(ProbeFailure::Absent { status: 404 }),
        }
    }

    fn submit_with(session: &mut Session, attempt: ResolutionAttempt) -> Completion {
        session.set_input(attempt.raw_input.clone());
        session.begin_submit().unwrap();
        session.complete(attempt)
    }

    /// Resolver whose probe only knows the given icon names
    fn resolver_knowing(known: &'static [&'static str]) -> Resolver {
        let mut probe = MockIconProbe::new();
        probe.expect_probe().returning(move |icon_ref: &IconRef| {
            let exists = known
                .iter()
                .any(|name| icon_ref.as_str() == format!("{}/{}.svg", ICONS, name));
            if exists {
                Ok(())
            } else {
                Err(ProbeFailure::Absent { status: 404 })
            }
        });

        let locator = IconLocator::new(&CdnSettings::default()).unwrap();
        Resolver::new(locator, Arc::new(probe))
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(DisplayMode::Dark);
        assert_eq!(session.phase(), &Phase::Idle);
        assert_eq!(session.mode(), DisplayMode::Dark);
        assert!(session.input().is_empty());
        assert!(session.collection().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_submit_enters_resolving() {
        let mut session = Session::default();
        session.set_input("GitHub");

        let pending = session.begin_submit().unwrap();
        assert_eq!(pending.raw_input, "GitHub");
        assert_eq!(pending.normalized_key, "github");
        assert!(session.is_resolving());
    }

    #[test]
    fn test_submit_while_resolving_is_busy() {
        let mut session = Session::default();
        session.set_input("twitter");
        session.begin_submit().unwrap();

        assert_eq!(
            session.begin_submit(),
            Err(SessionError::Busy("twitter".to_string()))
        );
    }

    #[test]
    fn test_input_locked_while_resolving() {
        let mut session = Session::default();
        session.set_input("twit");
        session.begin_submit().unwrap();

        session.push_char('x');
        session.pop_char();
        session.set_input("other");
        assert_eq!(session.input(), "twit");
    }

    #[test]
    fn test_found_clears_input_and_error() {
        let mut session = Session::default();
        submit_with(&mut session, missing("nope"));
        assert!(session.error().is_some());

        assert_eq!(submit_with(&mut session, found("twitter")), Completion::Added);
        assert!(session.input().is_empty());
        assert!(session.error().is_none());
        assert_eq!(session.phase(), &Phase::Idle);
        assert_eq!(
            session.collection().entries()[0].icon_ref.as_str(),
            format!("{}/twitter.svg", ICONS)
        );
    }

    #[test]
    fn test_failure_keeps_collection_and_input() {
        let mut session = Session::default();
        submit_with(&mut session, found("twitter"));
        submit_with(&mut session, found("github"));
        let before = session.collection().clone();

        assert_eq!(
            submit_with(&mut session, missing("not-a-real-platform-xyz")),
            Completion::Failed
        );
        assert_eq!(session.collection(), &before);
        assert_eq!(session.input(), "not-a-real-platform-xyz");
        assert_eq!(
            session.error().unwrap().to_string(),
            "Could not find an icon for \"not-a-real-platform-xyz\". Please try another social media."
        );
    }

    #[test]
    fn test_error_is_sticky_across_failures() {
        let mut session = Session::default();
        submit_with(&mut session, missing("first"));
        submit_with(&mut session, missing("Second"));

        assert_eq!(session.error().unwrap().raw_input, "Second");
    }

    #[test]
    fn test_duplicate_found_is_already_present() {
        let mut session = Session::default();
        submit_with(&mut session, found("GitHub"));

        assert_eq!(
            submit_with(&mut session, found("github")),
            Completion::AlreadyPresent
        );
        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.collection().entries()[0].name, "github");
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_unexpected_attempt_is_discarded() {
        let mut session = Session::default();
        assert_eq!(session.complete(found("twitter")), Completion::Discarded);

        session.set_input("github");
        session.begin_submit().unwrap();
        assert_eq!(session.complete(found("twitter")), Completion::Discarded);
        assert!(session.is_resolving());
        assert!(session.collection().is_empty());
    }

    #[test]
    fn test_toggle_mode_any_phase() {
        let mut session = Session::new(DisplayMode::Light);
        assert_eq!(session.toggle_mode(), DisplayMode::Dark);

        session.begin_submit().unwrap();
        assert_eq!(session.toggle_mode(), DisplayMode::Light);
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let resolver = resolver_knowing(&["twitter"]);
        let mut session = Session::default();

        session.set_input("twitter");
        assert_eq!(session.submit(&resolver).await, Ok(Completion::Added));
        assert_eq!(session.collection().len(), 1);
        assert!(session.input().is_empty());
        assert!(session.error().is_none());

        session.set_input("not-a-real-platform-xyz");
        assert_eq!(session.submit(&resolver).await, Ok(Completion::Failed));
        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.input(), "not-a-real-platform-xyz");
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn test_submit_empty_input_fails() {
        let resolver = resolver_knowing(&["twitter"]);
        let mut session = Session::default();

        assert_eq!(session.submit(&resolver).await, Ok(Completion::Failed));
        assert_eq!(session.error().unwrap().raw_input, "");
        assert!(session.collection().is_empty());
    }

    /// Probe that never answers
    struct HangingProbe;

    #[async_trait::async_trait]
    impl crate::services::IconProbe for HangingProbe {
        async fn probe(&self, _locator: &IconRef) -> std::result::Result<(), ProbeFailure> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_dropped_submit_returns_to_idle() {
        let locator = IconLocator::new(&CdnSettings::default()).unwrap();
        let resolver = Resolver::new(locator, Arc::new(HangingProbe));
        let mut session = Session::default();
        session.set_input("GitHub");

        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            session.submit(&resolver),
        )
        .await;

        assert!(timed_out.is_err());
        assert_eq!(session.phase(), &Phase::Idle);
        assert_eq!(session.input(), "GitHub");
        assert!(session.error().is_none());
        assert!(session.begin_submit().is_ok());
    }
}
