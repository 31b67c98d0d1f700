//! Error types for the social icons selector
//!
//! This module provides structured error definitions using thiserror.
//! The only error a user ever sees during a session is
//! [`IconNotResolvable`]; the rest cover configuration and start-up.

use std::fmt;
use thiserror::Error;

/// Main error type for social icons operations
#[derive(Error, Debug)]
pub enum SocialIconsError {
    /// Configuration file is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Icon locator could not be built from the configured template
    #[error("Invalid icon locator: {0}")]
    InvalidLocator(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for social icons operations
pub type Result<T> = std::result::Result<T, SocialIconsError>;

/// Convert anyhow::Error to SocialIconsError
impl From<anyhow::Error> for SocialIconsError {
    fn from(err: anyhow::Error) -> Self {
        SocialIconsError::Other(err.to_string())
    }
}

/// Why a probe did not confirm an icon.
///
/// Both variants surface to the user as the same [`IconNotResolvable`]
/// message. The split only feeds logging and the status bar hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The CDN answered with an error status (usually 404)
    Absent { status: u16 },

    /// The request never produced a usable response
    Transport { reason: String },
}

impl ProbeFailure {
    /// Whether retrying the same name might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ProbeFailure::Absent { status } => *status >= 500 || *status == 429,
            ProbeFailure::Transport { .. } => true,
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Absent { status } => write!(f, "CDN answered with status {}", status),
            ProbeFailure::Transport { reason } => write!(f, "request failed: {}", reason),
        }
    }
}

/// The user-facing resolution error held in the session's error slot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not find an icon for \"{raw_input}\". Please try another social media.")]
pub struct IconNotResolvable {
    /// Exactly what the user typed
    pub raw_input: String,

    /// Underlying probe failure
    pub cause: ProbeFailure,
}

impl IconNotResolvable {
    pub fn new(raw_input: impl Into<String>, cause: ProbeFailure) -> Self {
        Self {
            raw_input: raw_input.into(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_resolvable_message() {
        let err = IconNotResolvable::new(
            "not-a-real-platform-xyz",
            ProbeFailure::Absent { status: 404 },
        );
        assert_eq!(
            err.to_string(),
            "Could not find an icon for \"not-a-real-platform-xyz\". Please try another social media."
        );
    }

    #[test]
    fn test_message_keeps_raw_case() {
        let err = IconNotResolvable::new("MySpace2", ProbeFailure::Absent { status: 404 });
        assert!(err.to_string().contains("\"MySpace2\""));
    }

    #[test]
    fn test_transient_classification() {
        assert!(!ProbeFailure::Absent { status: 404 }.is_transient());
        assert!(ProbeFailure::Absent { status: 503 }.is_transient());
        assert!(ProbeFailure::Absent { status: 429 }.is_transient());
        assert!(ProbeFailure::Transport {
            reason: "timed out".to_string()
        }
        .is_transient());
    }

    #[test]
    fn test_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: SocialIconsError = toml_err.into();
        assert!(matches!(err, SocialIconsError::ConfigParse(_)));
    }
}
