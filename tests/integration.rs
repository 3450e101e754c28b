//! Integration tests for the two-screen authentication flow.
//!
//! Drives complete sessions through `parse_action` / `handle_action` and
//! checks the resulting screen state, plus direct checks of the validator
//! contract through the public API.

use login_flow::flow::{
    ActionResult, ActionStatus, FormSession, ScreenEvent, handle_action, parse_action,
};
use login_flow::navigate::Route;
use login_flow::{ValidationResult, validate_login, validate_registration};

// Helper to parse and dispatch one input line
fn dispatch(session: &mut FormSession, line: &str) -> ActionResult {
    handle_action(session, &parse_action(line))
}

// Helper to dispatch a sequence of input lines, returning the last result
fn drive(session: &mut FormSession, lines: &[&str]) -> ActionResult {
    let mut last = None;
    for line in lines {
        last = Some(dispatch(session, line));
    }
    last.expect("drive called with at least one line")
}

#[test]
fn test_login_succeeds_and_opens_dialog() {
    let mut session = FormSession::new();
    let result = drive(
        &mut session,
        &["EMAIL a@b.com", "PASSWORD abcABC#123", "SUBMIT"],
    );

    assert_eq!(result.status, ActionStatus::Success);
    assert_eq!(result.event, Some(ScreenEvent::LoginSucceeded));
    assert!(session.login().is_login_dialog_open());
    assert_eq!(session.login().email_error(), "");
    assert_eq!(session.login().password_error(), "");
}

#[test]
fn test_login_dialog_is_dismissable() {
    let mut session = FormSession::new();
    drive(
        &mut session,
        &["EMAIL a@b.com", "PASSWORD abcABC#123", "SUBMIT"],
    );

    let result = dispatch(&mut session, "OK");
    assert_eq!(result.status, ActionStatus::Success);
    assert!(!session.login().is_login_dialog_open());

    // Nothing left to dismiss
    let result = dispatch(&mut session, "OK");
    assert_eq!(
        result.status,
        ActionStatus::Failure("no open dialog".to_string())
    );
}

#[test]
fn test_login_with_empty_fields_reports_both_errors() {
    let mut session = FormSession::new();
    let result = dispatch(&mut session, "SUBMIT");

    assert_eq!(
        result.status,
        ActionStatus::Failure("validation failed".to_string())
    );
    assert_eq!(result.event, None);
    assert_eq!(session.login().email_error(), "invalid email");
    assert_eq!(session.login().password_error(), "incorrect password");
    assert!(!session.login().is_login_dialog_open());
}

#[test]
fn test_login_reports_single_field_error() {
    let mut session = FormSession::new();
    drive(
        &mut session,
        &["EMAIL no-at-sign", "PASSWORD abcABC#123", "SUBMIT"],
    );
    assert_eq!(session.login().email_error(), "invalid email");
    assert_eq!(session.login().password_error(), "");

    drive(&mut session, &["EMAIL a@b.com", "PASSWORD wrong", "SUBMIT"]);
    assert_eq!(session.login().email_error(), "");
    assert_eq!(session.login().password_error(), "incorrect password");
}

#[test]
fn test_corrected_input_clears_stale_errors() {
    let mut session = FormSession::new();
    dispatch(&mut session, "SUBMIT");
    assert_eq!(session.login().email_error(), "invalid email");

    let result = drive(
        &mut session,
        &["EMAIL a@b.com", "PASSWORD abcABC#123", "SUBMIT"],
    );
    assert_eq!(result.status, ActionStatus::Success);
    assert_eq!(session.login().email_error(), "");
    assert_eq!(session.login().password_error(), "");
}

#[test]
fn test_registration_succeeds_without_observable_followup() {
    let mut session = FormSession::new();
    let result = drive(
        &mut session,
        &[
            "GOTO register",
            "EMAIL a@b.com",
            "PASSWORD abcABC#123",
            "CONFIRM abcABC#123",
            "SUBMIT",
        ],
    );

    assert_eq!(result.status, ActionStatus::Success);
    assert_eq!(result.event, Some(ScreenEvent::RegistrationSucceeded));
    // Successful registration has no message, no dialog, no navigation
    assert_eq!(result.message, None);
    assert_eq!(session.route(), Route::Register);
    assert_eq!(session.register().email_error(), "");
    assert_eq!(session.register().password_error(), "");
    assert_eq!(session.register().confirm_error(), "");
}

#[test]
fn test_registration_with_blank_fields_reports_every_field() {
    let mut session = FormSession::new();
    let result = drive(&mut session, &["GOTO register", "SUBMIT"]);

    assert_eq!(
        result.status,
        ActionStatus::Failure("validation failed".to_string())
    );
    assert_eq!(session.register().email_error(), "email must not be empty");
    assert_eq!(
        session.register().password_error(),
        "password must not be empty"
    );
    assert_eq!(
        session.register().confirm_error(),
        "confirmation must not be empty"
    );
}

#[test]
fn test_registration_mismatched_confirmation_only() {
    let mut session = FormSession::new();
    drive(
        &mut session,
        &[
            "GOTO register",
            "EMAIL a@b.com",
            "PASSWORD abcABC#123",
            "CONFIRM different",
            "SUBMIT",
        ],
    );

    assert_eq!(session.register().email_error(), "");
    assert_eq!(session.register().password_error(), "");
    assert_eq!(session.register().confirm_error(), "passwords do not match");
}

#[test]
fn test_navigation_between_routes() {
    let mut session = FormSession::new();
    assert_eq!(session.route(), Route::Login);

    let result = dispatch(&mut session, "GOTO register");
    assert_eq!(result.status, ActionStatus::Success);
    assert_eq!(result.event, Some(ScreenEvent::Navigated(Route::Register)));
    assert_eq!(session.route(), Route::Register);

    dispatch(&mut session, "GOTO login");
    assert_eq!(session.route(), Route::Login);
}

#[test]
fn test_unknown_route_is_rejected() {
    let mut session = FormSession::new();
    let result = dispatch(&mut session, "GOTO settings");

    assert_eq!(
        result.status,
        ActionStatus::Failure("unknown route: settings".to_string())
    );
    assert_eq!(session.route(), Route::Login);
}

#[test]
fn test_screen_state_survives_navigation() {
    let mut session = FormSession::new();
    drive(
        &mut session,
        &["EMAIL login@example.com", "GOTO register", "EMAIL reg@example.com"],
    );

    assert_eq!(session.register().email(), "reg@example.com");
    dispatch(&mut session, "GOTO login");
    assert_eq!(session.login().email(), "login@example.com");
}

#[test]
fn test_route_specific_actions_are_rejected() {
    let mut session = FormSession::new();

    // Login screen has no confirmation field
    let result = dispatch(&mut session, "CONFIRM whatever");
    assert_eq!(
        result.status,
        ActionStatus::Failure("no confirmation field on this screen".to_string())
    );

    // Registration screen has no forgot link or remember-me checkbox
    dispatch(&mut session, "GOTO register");
    assert!(matches!(
        dispatch(&mut session, "FORGOT").status,
        ActionStatus::Failure(_)
    ));
    assert!(matches!(
        dispatch(&mut session, "REMEMBER ON").status,
        ActionStatus::Failure(_)
    ));
}

#[test]
fn test_visibility_toggles_and_remember_me() {
    let mut session = FormSession::new();
    assert!(!session.login().is_password_visible());

    dispatch(&mut session, "TOGGLE");
    assert!(session.login().is_password_visible());
    dispatch(&mut session, "TOGGLE");
    assert!(!session.login().is_password_visible());

    dispatch(&mut session, "REMEMBER ON");
    assert!(session.login().remember_me());
    dispatch(&mut session, "REMEMBER OFF");
    assert!(!session.login().remember_me());

    dispatch(&mut session, "GOTO register");
    dispatch(&mut session, "TOGGLE CONFIRM");
    assert!(session.register().is_confirm_visible());
    assert!(!session.register().is_password_visible());
}

#[test]
fn test_forgot_password_dialog() {
    let mut session = FormSession::new();
    let result = dispatch(&mut session, "FORGOT");

    assert_eq!(result.status, ActionStatus::Success);
    assert!(session.login().is_forgot_dialog_open());

    dispatch(&mut session, "OK");
    assert!(!session.login().is_forgot_dialog_open());
}

#[test]
fn test_reset_restores_screen_defaults() {
    let mut session = FormSession::new();
    drive(
        &mut session,
        &["EMAIL bad", "PASSWORD bad", "REMEMBER ON", "SUBMIT", "RESET"],
    );

    assert_eq!(session.login().email(), "");
    assert_eq!(session.login().password(), "");
    assert_eq!(session.login().email_error(), "");
    assert_eq!(session.login().password_error(), "");
    assert!(!session.login().remember_me());
}

#[test]
fn test_submit_updates_only_the_current_screen() {
    let mut session = FormSession::new();
    drive(&mut session, &["GOTO register", "SUBMIT", "GOTO login"]);

    assert_eq!(session.login().email_error(), "");
    assert_eq!(session.login().password_error(), "");
    assert_eq!(session.register().email_error(), "email must not be empty");
}

#[test]
fn test_repeated_submit_is_stable() {
    let mut session = FormSession::new();
    drive(&mut session, &["EMAIL x", "PASSWORD y", "SUBMIT"]);
    let first = (
        session.login().email_error().to_string(),
        session.login().password_error().to_string(),
    );

    dispatch(&mut session, "SUBMIT");
    assert_eq!(session.login().email_error(), first.0);
    assert_eq!(session.login().password_error(), first.1);
}

#[test]
fn test_quit_closes_the_session() {
    let mut session = FormSession::new();
    let result = dispatch(&mut session, "QUIT");

    assert_eq!(result.status, ActionStatus::CloseSession);
    assert_eq!(result.message, Some("goodbye".to_string()));
}

#[test]
fn test_unknown_action_is_reported() {
    let mut session = FormSession::new();
    let result = dispatch(&mut session, "LAUNCH missiles");
    assert!(matches!(result.status, ActionStatus::Failure(_)));
}

#[test]
fn test_validator_contract_through_public_api() {
    // Exactly one of success/failure, for both operations
    assert!(validate_login("a@b.com", "abcABC#123").is_success());
    assert!(!validate_login("", "").is_success());
    assert_eq!(
        validate_registration("a@b.com", "abcABC#123", "abcABC#123"),
        ValidationResult::Success
    );

    // Identical input yields identical results
    assert_eq!(
        validate_login("no-at-sign", "wrong"),
        validate_login("no-at-sign", "wrong")
    );
    assert_eq!(
        validate_registration("", "", ""),
        validate_registration("", "", "")
    );
}
