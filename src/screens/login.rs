//! Module `login`
//!
//! Defines the `LoginScreen` struct and associated methods to manage the
//! login form state, including field values, inline error strings, and
//! dialog visibility.

use log::info;

use crate::validation::{ValidationResult, validate_login};

/// Represents the state of the login screen.
///
/// Error strings are empty when the corresponding field has no error;
/// they change only on submit or reset, never while typing.
#[derive(Debug, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    email_error: String,
    password_error: String,
    remember_me: bool,
    password_visible: bool,
    login_dialog_open: bool,
    forgot_dialog_open: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the current field values and applies the result.
    ///
    /// On success the error strings are cleared and the sign-in dialog
    /// opens; on failure each failing field gets its message and the
    /// other fields are cleared.
    pub fn submit(&mut self) -> ValidationResult {
        let result = validate_login(&self.email, &self.password);
        match &result {
            ValidationResult::Success => {
                self.email_error.clear();
                self.password_error.clear();
                self.login_dialog_open = true;
                info!("Login accepted for {}", self.email);
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
                info!("Login rejected for '{}'", self.email);
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

    /// Returns the inline error for the email field, empty if none.
    pub fn email_error(&self) -> &str {
        &self.email_error
    }

    /// Returns the inline error for the password field, empty if none.
    pub fn password_error(&self) -> &str {
        &self.password_error
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// Returns whether the password is rendered in plaintext.
    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Returns whether the sign-in confirmation dialog is open.
    pub fn is_login_dialog_open(&self) -> bool {
        self.login_dialog_open
    }

    /// Returns whether the forgot-password dialog is open.
    pub fn is_forgot_dialog_open(&self) -> bool {
        self.forgot_dialog_open
    }

    pub fn has_open_dialog(&self) -> bool {
        self.login_dialog_open || self.forgot_dialog_open
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

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    /// Flips the password between masked and plaintext rendering.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Opens the forgot-password dialog.
    pub fn open_forgot_dialog(&mut self) {
        self.forgot_dialog_open = true;
    }

    /// Closes any open dialog.
    pub fn dismiss_dialogs(&mut self) {
        self.login_dialog_open = false;
        self.forgot_dialog_open = false;
    }
}
