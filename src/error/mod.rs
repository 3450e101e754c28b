//! Error handling
//!
//! Defines error types for each layer of the flow engine.

pub mod types;

pub use types::*;
