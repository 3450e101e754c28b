//! Screen state
//!
//! Explicit local state for the two form screens. Each screen owns its
//! field values, per-field error strings, and ephemeral UI flags, and
//! applies validation results to that state on submit.

pub mod login;
pub mod register;

pub use login::LoginScreen;
pub use register::RegisterScreen;
