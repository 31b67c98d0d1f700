//! Services layer for the social icons selector
//!
//! Provides the network probe that confirms icons exist on the CDN.

pub mod probe;

pub use probe::{HttpProbe, IconProbe};
