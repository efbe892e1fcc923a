//! # Application Layer
//!
//! The generator interface and the use case that renders a persona prompt
//! and asks a generator for the reply.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
