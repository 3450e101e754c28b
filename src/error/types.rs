//! Error types
//!
//! Defines domain-specific error types for each module of the flow engine.

use std::fmt;
use std::io;

use serde::Serialize;

use crate::validation::credentials::EXPECTED_PASSWORD;

/// Validation module errors
///
/// One variant per field rule. The `Display` output is the user-facing
/// message rendered beneath the offending field; validation failure is an
/// ordinary outcome, not a propagated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// Registration email left blank.
    EmptyEmail,
    /// Email does not look like an address (no `@`), or is blank on login.
    InvalidEmail,
    /// Registration password left blank.
    EmptyPassword,
    /// Login password does not match the expected credential.
    IncorrectPassword,
    /// Registration password does not match the expected credential.
    PasswordMismatch,
    /// Password confirmation left blank.
    EmptyConfirmation,
    /// Password confirmation differs from the password.
    ConfirmationMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyEmail => write!(f, "email must not be empty"),
            ValidationError::InvalidEmail => write!(f, "invalid email"),
            ValidationError::EmptyPassword => write!(f, "password must not be empty"),
            ValidationError::IncorrectPassword => write!(f, "incorrect password"),
            ValidationError::PasswordMismatch => {
                write!(f, "password must equal '{}'", EXPECTED_PASSWORD)
            }
            ValidationError::EmptyConfirmation => write!(f, "confirmation must not be empty"),
            ValidationError::ConfirmationMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownRoute(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownRoute(name) => write!(f, "unknown route: {}", name),
        }
    }
}

impl std::error::Error for RouteError {}

/// General flow-engine error that encompasses all error types
#[derive(Debug)]
pub enum FlowError {
    Validation(ValidationError),
    Route(RouteError),
    IoError(io::Error),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Validation(e) => write!(f, "Validation error: {}", e),
            FlowError::Route(e) => write!(f, "Route error: {}", e),
            FlowError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FlowError {}

// Implement conversions from specific errors to FlowError
impl From<ValidationError> for FlowError {
    fn from(error: ValidationError) -> Self {
        FlowError::Validation(error)
    }
}

impl From<RouteError> for FlowError {
    fn from(error: RouteError) -> Self {
        FlowError::Route(error)
    }
}

impl From<io::Error> for FlowError {
    fn from(error: io::Error) -> Self {
        FlowError::IoError(error)
    }
}
