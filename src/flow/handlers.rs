//! Action handlers module for the form flow.
//!
//! This module defines handler functions for form actions, handling field
//! edits, submits, dialog management, and navigation per session.

use log::info;

use crate::flow::session::FormSession;
use crate::flow::{Action, ActionResult, ActionStatus, ScreenEvent};
use crate::navigate::Route;
use crate::validation::ValidationResult;

/// Dispatches a parsed action to its corresponding handler.
///
/// Actions that do not apply to the current route fail with a message and
/// leave all state untouched.
pub fn handle_action(session: &mut FormSession, action: &Action) -> ActionResult {
    match action {
        Action::Email(value) => handle_set_email(session, value),
        Action::Password(value) => handle_set_password(session, value),
        Action::Confirm(value) => handle_set_confirmation(session, value),
        Action::Submit => handle_submit(session),
        Action::TogglePassword => handle_toggle_password(session),
        Action::ToggleConfirm => handle_toggle_confirm(session),
        Action::Remember(remember) => handle_remember(session, *remember),
        Action::Forgot => handle_forgot(session),
        Action::Dismiss => handle_dismiss(session),
        Action::Goto(name) => handle_goto(session, name),
        Action::Reset => handle_reset(session),
        Action::Quit => handle_quit(),
        Action::Unknown => handle_unknown(),
    }
}

fn success(message: &str) -> ActionResult {
    ActionResult {
        status: ActionStatus::Success,
        message: Some(message.to_string()),
        event: None,
    }
}

fn failure(message: &str) -> ActionResult {
    ActionResult {
        status: ActionStatus::Failure(message.to_string()),
        message: Some(message.to_string()),
        event: None,
    }
}

/// Handles an email edit on whichever screen is shown.
fn handle_set_email(session: &mut FormSession, value: &str) -> ActionResult {
    match session.route() {
        Route::Login => session.login_mut().set_email(value.to_string()),
        Route::Register => session.register_mut().set_email(value.to_string()),
    }
    success("email updated")
}

/// Handles a password edit on whichever screen is shown.
fn handle_set_password(session: &mut FormSession, value: &str) -> ActionResult {
    match session.route() {
        Route::Login => session.login_mut().set_password(value.to_string()),
        Route::Register => session.register_mut().set_password(value.to_string()),
    }
    success("password updated")
}

/// Handles a confirmation edit; only the registration screen has that field.
fn handle_set_confirmation(session: &mut FormSession, value: &str) -> ActionResult {
    match session.route() {
        Route::Login => failure("no confirmation field on this screen"),
        Route::Register => {
            session
                .register_mut()
                .set_confirm_password(value.to_string());
            success("confirmation updated")
        }
    }
}

/// Handles a submit: validates the current form and reports the outcome.
///
/// A rejected submit is an ordinary result; the field messages end up on
/// the screen, not in the failure status.
fn handle_submit(session: &mut FormSession) -> ActionResult {
    match session.route() {
        Route::Login => match session.login_mut().submit() {
            ValidationResult::Success => ActionResult {
                status: ActionStatus::Success,
                message: Some("signed in successfully".to_string()),
                event: Some(ScreenEvent::LoginSucceeded),
            },
            ValidationResult::Failure(_) => ActionResult {
                status: ActionStatus::Failure("validation failed".to_string()),
                message: Some("sign-in rejected, check the fields below".to_string()),
                event: None,
            },
        },
        Route::Register => match session.register_mut().submit() {
            // The flow takes no further action on a successful
            // registration; the event is the only observable outcome.
            ValidationResult::Success => ActionResult {
                status: ActionStatus::Success,
                message: None,
                event: Some(ScreenEvent::RegistrationSucceeded),
            },
            ValidationResult::Failure(_) => ActionResult {
                status: ActionStatus::Failure("validation failed".to_string()),
                message: Some("registration rejected, check the fields below".to_string()),
                event: None,
            },
        },
    }
}

/// Handles a password visibility toggle on the current screen.
fn handle_toggle_password(session: &mut FormSession) -> ActionResult {
    let visible = match session.route() {
        Route::Login => session.login_mut().toggle_password_visibility(),
        Route::Register => session.register_mut().toggle_password_visibility(),
    };
    if visible {
        success("password shown")
    } else {
        success("password hidden")
    }
}

/// Handles a confirmation visibility toggle; registration screen only.
fn handle_toggle_confirm(session: &mut FormSession) -> ActionResult {
    match session.route() {
        Route::Login => failure("no confirmation field on this screen"),
        Route::Register => {
            if session.register_mut().toggle_confirm_visibility() {
                success("confirmation shown")
            } else {
                success("confirmation hidden")
            }
        }
    }
}

/// Handles the remember-me checkbox; login screen only.
fn handle_remember(session: &mut FormSession, remember: bool) -> ActionResult {
    match session.route() {
        Route::Login => {
            session.login_mut().set_remember_me(remember);
            if remember {
                success("remember me enabled")
            } else {
                success("remember me disabled")
            }
        }
        Route::Register => failure("remember me is not available on this screen"),
    }
}

/// Handles the forgot-password link; login screen only.
fn handle_forgot(session: &mut FormSession) -> ActionResult {
    match session.route() {
        Route::Login => {
            session.login_mut().open_forgot_dialog();
            success("forgot-password dialog opened")
        }
        Route::Register => failure("forgot password is not available on this screen"),
    }
}

/// Handles a dialog dismissal; only the login screen has dialogs.
fn handle_dismiss(session: &mut FormSession) -> ActionResult {
    match session.route() {
        Route::Login => {
            if session.login().has_open_dialog() {
                session.login_mut().dismiss_dialogs();
                success("dialog dismissed")
            } else {
                failure("no open dialog")
            }
        }
        Route::Register => failure("no dialog on this screen"),
    }
}

/// Handles navigation to a named route.
fn handle_goto(session: &mut FormSession, name: &str) -> ActionResult {
    match session.router_mut().navigate_named(name) {
        Ok(route) => ActionResult {
            status: ActionStatus::Success,
            message: Some(format!("switched to the {} screen", route.name())),
            event: Some(ScreenEvent::Navigated(route)),
        },
        Err(e) => failure(&e.to_string()),
    }
}

/// Handles a reset of the current screen back to its defaults.
fn handle_reset(session: &mut FormSession) -> ActionResult {
    match session.route() {
        Route::Login => session.login_mut().reset(),
        Route::Register => session.register_mut().reset(),
    }
    info!("Screen {} reset", session.route());
    success("form cleared")
}

/// Handles the QUIT action: signals session close.
fn handle_quit() -> ActionResult {
    ActionResult {
        status: ActionStatus::CloseSession,
        message: Some("goodbye".to_string()),
        event: None,
    }
}

/// Handles unknown or unsupported actions.
fn handle_unknown() -> ActionResult {
    failure(
        "unknown action; try EMAIL, PASSWORD, CONFIRM, SUBMIT, TOGGLE, \
         REMEMBER ON|OFF, FORGOT, OK, GOTO <route>, RESET or QUIT",
    )
}
