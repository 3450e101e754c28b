//! Validation result types
//!
//! Defines result structures returned by validation operations.

use serde::Serialize;

use crate::error::ValidationError;

/// Per-field validation errors
///
/// An absent entry means the field passed its rule. The confirmation
/// entry stays absent for login, which has no confirmation field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub confirm_password: Option<ValidationError>,
}

impl FieldErrors {
    /// Returns whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Outcome of validating one submit action
///
/// `Success` is returned if and only if every evaluated field passed;
/// `Failure` carries at least one field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationResult {
    Success,
    Failure(FieldErrors),
}

impl ValidationResult {
    /// Builds the outcome from collected field errors, keeping the
    /// success-iff-no-errors invariant.
    pub fn from_errors(errors: FieldErrors) -> Self {
        if errors.is_empty() {
            ValidationResult::Success
        } else {
            ValidationResult::Failure(errors)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// Returns the field errors of a failed validation.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(errors) => Some(errors),
        }
    }
}
