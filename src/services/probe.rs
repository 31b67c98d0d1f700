//! Icon existence probe
//!
//! The probe is the only network boundary of the selector: one GET against
//! a candidate icon locator, reduced to "exists" or a [`ProbeFailure`].

use crate::error::{ProbeFailure, Result};
use crate::types::IconRef;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Existence check for a single icon locator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IconProbe: Send + Sync {
    /// `Ok(())` when the locator answered with a success status
    async fn probe(&self, locator: &IconRef) -> std::result::Result<(), ProbeFailure>;
}

/// reqwest-backed probe, one GET per call and no retries
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("social-icons/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl IconProbe for HttpProbe {
    async fn probe(&self, locator: &IconRef) -> std::result::Result<(), ProbeFailure> {
        debug!("Probing {}", locator);

        let response = self
            .client
            .get(locator.as_str())
            .send()
            .await
            .map_err(|e| ProbeFailure::Transport {
                reason: if e.is_timeout() {
                    "timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        debug!("Probe of {} answered {}", locator, status);

        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeFailure::Absent {
                status: status.as_u16(),
            })
        }
    }
}
