//! Module `register`
//!
//! Defines the `RegisterScreen` struct and associated methods to manage
//! the registration form state.

use log::info;

use crate::validation::{ValidationResult, validate_registration};

/// Represents the state of the registration screen.
///
/// Carries one more field than the login screen (the password
/// confirmation) and no dialogs; a successful registration has no
/// observable follow-up.
#[derive(Debug, Default)]
pub struct RegisterScreen {
    email: String,
    password: String,
    confirm_password: String,
    email_error: String,
    password_error: String,
    confirm_error: String,
    password_visible: bool,
    confirm_visible: bool,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the current field values and applies the result.
    ///
    /// All three fields are evaluated on every submit; each failing field
    /// gets its message and the others are cleared.
    pub fn submit(&mut self) -> ValidationResult {
        let result = validate_registration(&self.email, &self.password, &self.confirm_password);
        match &result {
            ValidationResult::Success => {
                self.email_error.clear();
                self.password_error.clear();
                self.confirm_error.clear();
                info!("Registration accepted for {}", self.email);
            }
            ValidationResult::Failure(errors) => {
                self.email_error = errors
                    .email
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                self.password_error = errors
                    .password
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                self.confirm_error = errors
                    .confirm_password
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                info!("Registration rejected for '{}'", self.email);
            }
        }
        result
    }

    /// Clears the whole screen back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn email_error(&self) -> &str {
        &self.email_error
    }

    pub fn password_error(&self) -> &str {
        &self.password_error
    }

    pub fn confirm_error(&self) -> &str {
        &self.confirm_error
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn is_confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_confirm_password(&mut self, confirmation: String) {
        self.confirm_password = confirmation;
    }

    /// Flips the password between masked and plaintext rendering.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Flips the confirmation field between masked and plaintext rendering.
    pub fn toggle_confirm_visibility(&mut self) -> bool {
        self.confirm_visible = !self.confirm_visible;
        self.confirm_visible
    }
}
