//! Screen rendering
//!
//! Formats screen state as plain text: field lines, inline error lines
//! beneath the offending fields, and dialog boxes.

use crate::flow::FormSession;
use crate::navigate::Route;
use crate::screens::{LoginScreen, RegisterScreen};

const LOGIN_DIALOG_TITLE: &str = "Sign-in successful";
const LOGIN_DIALOG_BODY: &str = "You have signed in successfully!";
const FORGOT_DIALOG_TITLE: &str = "Forgot password";
const FORGOT_DIALOG_BODY: &str = "Forgot your password? Please contact support.";

/// Renders the screen the session is currently showing.
pub fn render_session(session: &FormSession) -> String {
    match session.route() {
        Route::Login => render_login(session.login()),
        Route::Register => render_register(session.register()),
    }
}

fn render_login(screen: &LoginScreen) -> String {
    let mut out = String::new();
    out.push_str("== Sign in ==\n");
    push_field(&mut out, "Email", screen.email());
    push_error(&mut out, screen.email_error());
    push_field(
        &mut out,
        "Password",
        &mask(screen.password(), screen.is_password_visible()),
    );
    push_error(&mut out, screen.password_error());
    if screen.remember_me() {
        out.push_str("  [x] Remember me\n");
    } else {
        out.push_str("  [ ] Remember me\n");
    }
    if screen.is_login_dialog_open() {
        push_dialog(&mut out, LOGIN_DIALOG_TITLE, LOGIN_DIALOG_BODY);
    }
    if screen.is_forgot_dialog_open() {
        push_dialog(&mut out, FORGOT_DIALOG_TITLE, FORGOT_DIALOG_BODY);
    }
    out.push_str("No account? GOTO register\n");
    out
}

fn render_register(screen: &RegisterScreen) -> String {
    let mut out = String::new();
    out.push_str("== Register ==\n");
    push_field(&mut out, "Email", screen.email());
    push_error(&mut out, screen.email_error());
    push_field(
        &mut out,
        "Password",
        &mask(screen.password(), screen.is_password_visible()),
    );
    push_error(&mut out, screen.password_error());
    push_field(
        &mut out,
        "Confirm",
        &mask(screen.confirm_password(), screen.is_confirm_visible()),
    );
    push_error(&mut out, screen.confirm_error());
    out.push_str("Have an account? GOTO login\n");
    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<10}{}\n", format!("{}:", label), value));
}

fn push_error(out: &mut String, error: &str) {
    if !error.is_empty() {
        out.push_str(&format!("    ! {}\n", error));
    }
}

fn push_dialog(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("  +-- {} --+\n", title));
    out.push_str(&format!("  | {}\n", body));
    out.push_str("  | (type OK to dismiss)\n");
    out.push_str("  +--\n");
}

/// Masks a field value with one `*` per character unless visibility is
/// toggled on.
pub fn mask(value: &str, visible: bool) -> String {
    if visible {
        value.to_string()
    } else {
        "*".repeat(value.chars().count())
    }
}
