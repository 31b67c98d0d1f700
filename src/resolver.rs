//! Input normalization and icon resolution
//!
//! A resolution turns free text into a normalized key, embeds the key in the
//! CDN locator template and asks the [`IconProbe`] whether the icon exists:
//!
//! ```text
//! <base_url>/npm/<package>@<version>/icons/<key>.svg
//! ```
//!
//! The key is percent-escaped as a single path segment, so input such as
//! `../x` or `a?b` can never leave the `icons/` directory or add a query.

use crate::config::{AppConfig, CdnSettings};
use crate::error::{ProbeFailure, Result, SocialIconsError};
use crate::services::{HttpProbe, IconProbe};
use crate::types::{IconRef, Outcome, ResolutionAttempt};
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info};

/// Lowercase the input and otherwise pass it through.
///
/// No trimming and no allow-list: `""` stays `""` and is still probed.
pub fn normalize(raw_input: &str) -> String {
    raw_input.to_lowercase()
}

/// Builds icon locators from the configured CDN template
#[derive(Debug, Clone)]
pub struct IconLocator {
    base: Url,
    package_spec: String,
}

impl IconLocator {
    pub fn new(cdn: &CdnSettings) -> Result<Self> {
        let base = Url::parse(&cdn.base_url)
            .map_err(|e| SocialIconsError::InvalidLocator(format!("{}: {}", cdn.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(SocialIconsError::InvalidLocator(format!(
                "{} cannot carry a path",
                cdn.base_url
            )));
        }

        Ok(Self {
            base,
            package_spec: format!("{}@{}", cdn.package, cdn.version),
        })
    }

    /// Locator of the icon for `normalized_key`
    pub fn for_key(&self, normalized_key: &str) -> Result<IconRef> {
        let file = format!("{}.svg", normalized_key);
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SocialIconsError::InvalidLocator(self.base.to_string()))?
            .pop_if_empty()
            .extend(["npm", self.package_spec.as_str(), "icons", file.as_str()]);

        Ok(IconRef::new(url.to_string()))
    }
}

/// Normalizes input and confirms icons through a probe
#[derive(Clone)]
pub struct Resolver {
    locator: IconLocator,
    probe: Arc<dyn IconProbe>,
}

impl Resolver {
    pub fn new(locator: IconLocator, probe: Arc<dyn IconProbe>) -> Self {
        Self { locator, probe }
    }

    /// Resolver backed by [`HttpProbe`] with the configured CDN and timeout
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let locator = IconLocator::new(&config.cdn)?;
        let probe = HttpProbe::new(config.probe.timeout())?;
        Ok(Self::new(locator, Arc::new(probe)))
    }

    pub fn locator(&self) -> &IconLocator {
        &self.locator
    }

    /// Probe the locator for `normalized_key` once.
    pub async fn confirm_exists(&self, normalized_key: &str) -> Outcome {
        let icon_ref = match self.locator.for_key(normalized_key) {
            Ok(icon_ref) => icon_ref,
            Err(e) => {
                return Outcome::NotFound(ProbeFailure::Transport {
                    reason: e.to_string(),
                })
            }
        };

        match self.probe.probe(&icon_ref).await {
            Ok(()) => Outcome::Found(icon_ref),
            Err(failure) => Outcome::NotFound(failure),
        }
    }

    /// Run one full normalize → probe cycle
    pub async fn resolve(&self, raw_input: &str) -> ResolutionAttempt {
        let normalized_key = normalize(raw_input);
        let outcome = self.confirm_exists(&normalized_key).await;

        match &outcome {
            Outcome::Found(icon_ref) => info!("Resolved '{}' to {}", raw_input, icon_ref),
            Outcome::NotFound(failure) => {
                debug!("No icon for '{}': {}", raw_input, failure)
            }
        }

        ResolutionAttempt {
            raw_input: raw_input.to_string(),
            normalized_key,
            outcome,
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}
