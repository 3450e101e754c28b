//! Form session management
//!
//! Bundles the router and both screens into one session whose state
//! persists across navigation.

use crate::navigate::{Route, Router};
use crate::screens::{LoginScreen, RegisterScreen};

/// Holds all mutable state of one interactive flow session.
#[derive(Default)]
pub struct FormSession {
    router: Router,
    login: LoginScreen,
    register: RegisterScreen,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the route currently shown.
    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn login(&self) -> &LoginScreen {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginScreen {
        &mut self.login
    }

    pub fn register(&self) -> &RegisterScreen {
        &self.register
    }

    pub fn register_mut(&mut self) -> &mut RegisterScreen {
        &mut self.register
    }
}
