//! Module `actions`
//!
//! Defines the form action parsing logic and related data structures
//! used to represent actions, their status, and dispatch results.

use crate::navigate::Route;

/// Represents one presentation-layer action parsed from an input line.
///
/// Field setters keep their argument verbatim (minus surrounding
/// whitespace); a missing argument sets the empty string, since blank is
/// a valid, simply-failing input.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Email(String),     // Set the email field
    Password(String),  // Set the password field
    Confirm(String),   // Set the password-confirmation field
    Submit,            // Validate the current form
    TogglePassword,    // Flip password masking
    ToggleConfirm,     // Flip confirmation masking
    Remember(bool),    // Set the remember-me checkbox
    Forgot,            // Open the forgot-password dialog
    Dismiss,           // Close any open dialog
    Goto(String),      // Navigate to a named route
    Reset,             // Clear the current form
    Quit,              // End the session
    Unknown,           // Unknown or unsupported action
}

impl Action {
    /// Verb name used for logging; argument values are omitted so field
    /// contents never reach the log.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Email(_) => "EMAIL",
            Action::Password(_) => "PASSWORD",
            Action::Confirm(_) => "CONFIRM",
            Action::Submit => "SUBMIT",
            Action::TogglePassword => "TOGGLE PASSWORD",
            Action::ToggleConfirm => "TOGGLE CONFIRM",
            Action::Remember(true) => "REMEMBER ON",
            Action::Remember(false) => "REMEMBER OFF",
            Action::Forgot => "FORGOT",
            Action::Dismiss => "OK",
            Action::Goto(_) => "GOTO",
            Action::Reset => "RESET",
            Action::Quit => "QUIT",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of dispatching an action.
#[derive(Debug, PartialEq, Eq)]
pub enum ActionStatus {
    Success,
    Failure(String),
    CloseSession,
}

/// Notification emitted when an action produced something the embedding
/// layer may want to react to beyond re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    LoginSucceeded,
    RegistrationSucceeded,
    Navigated(Route),
}

/// Struct encapsulating the full result of dispatching an action.
#[derive(Debug)]
pub struct ActionResult {
    pub status: ActionStatus,
    pub message: Option<String>,
    pub event: Option<ScreenEvent>,
}

/// Parses a raw input line into the `Action` enum.
///
/// The verb is case-insensitive; the rest of the line is the argument.
pub fn parse_action(raw: &str) -> Action {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match verb.as_str() {
        "EMAIL" => Action::Email(arg.to_string()),
        "PASSWORD" => Action::Password(arg.to_string()),
        "CONFIRM" => Action::Confirm(arg.to_string()),
        "SUBMIT" => Action::Submit,
        "TOGGLE" => match arg.to_ascii_uppercase().as_str() {
            "" | "PASSWORD" => Action::TogglePassword,
            "CONFIRM" => Action::ToggleConfirm,
            _ => Action::Unknown,
        },
        "REMEMBER" => match arg.to_ascii_uppercase().as_str() {
            "ON" => Action::Remember(true),
            "OFF" => Action::Remember(false),
            _ => Action::Unknown,
        },
        "FORGOT" => Action::Forgot,
        "OK" => Action::Dismiss,
        "GOTO" if !arg.is_empty() => Action::Goto(arg.to_string()),
        "RESET" => Action::Reset,
        "QUIT" | "Q" => Action::Quit,
        _ => Action::Unknown,
    }
}
