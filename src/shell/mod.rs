//! Interactive shell
//!
//! This module contains the console front end that plays the role of the
//! presentation layer: it collects input lines, dispatches them as form
//! actions, and renders the current screen.

pub mod core;
pub mod render;

pub use core::Shell;
