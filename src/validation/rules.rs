//! Validation rules
//!
//! Implements the form field rules: email shape checks, the fixed-password
//! comparison, and the password-confirmation match. The login and
//! registration forms apply different rules to the same fields, so each
//! form gets its own set of per-field checks.

use super::credentials::EXPECTED_PASSWORD;
use super::results::{FieldErrors, ValidationResult};
use crate::error::ValidationError;

/// Returns whether the input is empty or all whitespace.
fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Validates the email field of the login form.
///
/// Blank and malformed emails collapse into one error. The format check
/// only requires an `@` somewhere in the string.
pub fn validate_login_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates the password field of the login form against the expected
/// credential.
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password != EXPECTED_PASSWORD {
        return Err(ValidationError::IncorrectPassword);
    }
    Ok(())
}

/// Validates the email field of the registration form.
///
/// The blank check runs before the format check.
pub fn validate_registration_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        Err(ValidationError::EmptyEmail)
    } else if !email.contains('@') {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// Validates the password field of the registration form.
///
/// The blank check runs before the credential comparison.
pub fn validate_registration_password(password: &str) -> Result<(), ValidationError> {
    if is_blank(password) {
        Err(ValidationError::EmptyPassword)
    } else if password != EXPECTED_PASSWORD {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

/// Validates the confirmation field against the raw password value, not a
/// validated one.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if is_blank(confirmation) {
        Err(ValidationError::EmptyConfirmation)
    } else if confirmation != password {
        Err(ValidationError::ConfirmationMismatch)
    } else {
        Ok(())
    }
}

/// Validates a login submit.
///
/// Both fields are always evaluated; the result carries one error per
/// failing field.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    let errors = FieldErrors {
        email: validate_login_email(email).err(),
        password: validate_login_password(password).err(),
        confirm_password: None,
    };
    ValidationResult::from_errors(errors)
}

/// Validates a registration submit.
///
/// All three checks are independent and unconditional: a failure in one
/// field does not short-circuit the others.
pub fn validate_registration(email: &str, password: &str, confirmation: &str) -> ValidationResult {
    let errors = FieldErrors {
        email: validate_registration_email(email).err(),
        password: validate_registration_password(password).err(),
        confirm_password: validate_password_confirmation(password, confirmation).err(),
    };
    ValidationResult::from_errors(errors)
}
