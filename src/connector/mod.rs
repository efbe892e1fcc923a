//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP client for KoboldAI-compatible generation servers
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
