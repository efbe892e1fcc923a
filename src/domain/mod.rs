//! # Domain Layer
//!
//! Generation parameters, prompt templates and the persona.
//! This layer is independent of the HTTP transport and the CLI.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
