//! Core data types for the social icons selector
//!
//! This module defines the values that flow between the resolver, the
//! collection and the session: confirmed entries, icon locators, resolution
//! attempts and the display mode.

use crate::error::ProbeFailure;
use serde::{Deserialize, Serialize};

/// Resolvable locator of a confirmed icon asset
///
/// Wraps the fully built URL string so it cannot be mixed up with the
/// normalized key it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A confirmed icon in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Normalized lowercase key, unique within a collection
    pub name: String,

    /// Locator of the icon that was confirmed for `name`
    pub icon_ref: IconRef,
}

impl Entry {
    /// Create an entry, folding the name to lowercase
    pub fn new(name: &str, icon_ref: IconRef) -> Self {
        Self {
            name: name.to_lowercase(),
            icon_ref,
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name.to_lowercase()
    }
}

/// Result of a single existence probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The icon exists at this locator
    Found(IconRef),

    /// The probe did not confirm the icon
    NotFound(ProbeFailure),
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// One normalize → probe → outcome cycle
///
/// Ephemeral: the session consumes it and only keeps the resulting entry
/// or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionAttempt {
    /// Text exactly as the user submitted it
    pub raw_input: String,

    /// Lowercased form used as key and path segment
    pub normalized_key: String,

    pub outcome: Outcome,
}

impl ResolutionAttempt {
    /// Entry to insert, when the attempt found an icon
    pub fn entry(&self) -> Option<Entry> {
        match &self.outcome {
            Outcome::Found(icon_ref) => Some(Entry::new(&self.normalized_key, icon_ref.clone())),
            Outcome::NotFound(_) => None,
        }
    }
}

/// Light/dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_is_lowercased() {
        let entry = Entry::new("GitHub", IconRef::new("https://cdn/github.svg"));
        assert_eq!(entry.name, "github");
        assert!(entry.has_name("GITHUB"));
        assert!(!entry.has_name("gitlab"));
    }

    #[test]
    fn test_attempt_entry() {
        let found = ResolutionAttempt {
            raw_input: "Twitter".to_string(),
            normalized_key: "twitter".to_string(),
            outcome: Outcome::Found(IconRef::new("https://cdn/twitter.svg")),
        };
        let entry = found.entry().unwrap();
        assert_eq!(entry.name, "twitter");
        assert_eq!(entry.icon_ref.as_str(), "https://cdn/twitter.svg");

        let missing = ResolutionAttempt {
            raw_input: "nope".to_string(),
            normalized_key: "nope".to_string(),
            outcome: Outcome::NotFound(ProbeFailure::Absent { status: 404 }),
        };
        assert!(missing.entry().is_none());
    }

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled().toggled(), DisplayMode::Dark);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry::new("twitter", IconRef::new("https://cdn/twitter.svg"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"twitter","icon_ref":"https://cdn/twitter.svg"}"#
        );
    }
}
