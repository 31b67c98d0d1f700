//! Configuration for the social icons selector
//!
//! # Configuration File Format
//!
//! TOML format in `<config dir>/social-icons/config.toml`:
//!
//! ```toml
//! [cdn]
//! base_url = "https://cdn.jsdelivr.net"
//! package = "simple-icons"
//! version = "latest"
//!
//! [probe]
//! timeout_secs = 10
//!
//! [display]
//! mode = "dark"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults above (display mode defaults to light).

use crate::error::{Result, SocialIconsError};
use crate::types::DisplayMode;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const DEFAULT_CDN_BASE_URL: &str = "https://cdn.jsdelivr.net";
const DEFAULT_ICON_PACKAGE: &str = "simple-icons";
const DEFAULT_ICON_VERSION: &str = "latest";
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
const MAX_PROBE_TIMEOUT_SECS: u64 = 120;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cdn: CdnSettings,

    #[serde(default)]
    pub probe: ProbeSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

/// Where icons are looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdnSettings {
    /// Scheme and host of the npm CDN
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// npm package holding the `icons/` directory
    #[serde(default = "default_package")]
    pub package: String,

    /// Package version or dist-tag
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for CdnSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            package: default_package(),
            version: default_version(),
        }
    }
}

/// Existence probe settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Upper bound on a single probe, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Mode the selector starts in
    #[serde(default)]
    pub mode: DisplayMode,
}

fn default_base_url() -> String {
    DEFAULT_CDN_BASE_URL.to_string()
}

fn default_package() -> String {
    DEFAULT_ICON_PACKAGE.to_string()
}

fn default_version() -> String {
    DEFAULT_ICON_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

/// Default config file location (`<config dir>/social-icons/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("social-icons").join("config.toml"))
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or the default path when it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.cdn.base_url).map_err(|e| {
            SocialIconsError::Config(format!("cdn.base_url '{}': {}", self.cdn.base_url, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(SocialIconsError::Config(format!(
                "cdn.base_url must be http or https, got '{}'",
                base.scheme()
            )));
        }

        Self::validate_segment("cdn.package", &self.cdn.package)?;
        Self::validate_segment("cdn.version", &self.cdn.version)?;

        if self.probe.timeout_secs == 0 || self.probe.timeout_secs > MAX_PROBE_TIMEOUT_SECS {
            return Err(SocialIconsError::Config(format!(
                "probe.timeout_secs must be between 1 and {}",
                MAX_PROBE_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    fn validate_segment(name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(SocialIconsError::Config(format!("{} cannot be empty", name)));
        }
        if value.contains('/') {
            return Err(SocialIconsError::Config(format!(
                "{} cannot contain '/': '{}'",
                name, value
            )));
        }
        Ok(())
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let toml_str =
            toml::to_string_pretty(self).map_err(|e| SocialIconsError::Config(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
