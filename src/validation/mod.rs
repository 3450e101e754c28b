//! Credential validation
//!
//! Implements the field rules for the login and registration forms.
//! Pure string checks with no I/O and no internal state.

pub mod credentials;
pub mod results;
pub mod rules;

pub use results::{FieldErrors, ValidationResult};
pub use rules::{
    validate_login, validate_login_email, validate_login_password, validate_password_confirmation,
    validate_registration, validate_registration_email, validate_registration_password,
};
