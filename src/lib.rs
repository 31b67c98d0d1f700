//! Social Icons - terminal selector for social media icons
//!
//! Type a platform name, and the selector checks the Simple Icons CDN for a
//! matching SVG. Confirmed icons are collected in a de-duplicated list shown
//! in insertion order; unknown names leave the list untouched and set a
//! recoverable error.
//!
//! # Architecture
//!
//! - **Resolver**: normalizes input and probes the CDN locator
//! - **Collection**: ordered, name-unique list of confirmed entries
//! - **Session**: the interaction state machine owning all display state
//! - **TUI**: ratatui front-end that renders the session and feeds it events
//!
//! # Example
//!
//! ```ignore
//! use social_icons_core::{AppConfig, Resolver, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let resolver = Resolver::from_config(&config)?;
//!     let mut session = Session::new(config.display.mode);
//!
//!     session.set_input("GitHub");
//!     session.submit(&resolver).await?;
//!     assert_eq!(session.collection().entries()[0].name, "github");
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod icons;
pub mod resolver;
pub mod services;
pub mod session;
pub mod tui;
pub mod types;

// Re-export commonly used types
pub use collection::Collection;
pub use config::AppConfig;
pub use error::{IconNotResolvable, ProbeFailure, Result, SocialIconsError};
pub use resolver::{normalize, IconLocator, Resolver};
pub use services::{HttpProbe, IconProbe};
pub use session::{Completion, PendingResolution, Phase, Session, SessionError};
pub use types::{DisplayMode, Entry, IconRef, Outcome, ResolutionAttempt};
