//! Navigate module
//!
//! Handles movement between the two named screens of the flow.

use std::fmt;

use log::info;
use serde::Serialize;

use crate::error::RouteError;

/// Named routes of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Login,
    Register,
}

impl Route {
    /// Returns the route name used in navigation requests.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Register => "register",
        }
    }

    /// Resolves a route from its name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Route, RouteError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Route::Login),
            "register" => Ok(Route::Register),
            other => Err(RouteError::UnknownRoute(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tracks which screen is currently shown. There is no history stack;
/// the flow only ever moves between its two routes.
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Login,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently shown route.
    pub fn current(&self) -> Route {
        self.current
    }

    /// Switches to the given route.
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating from {} to {}", self.current, route);
        self.current = route;
    }

    /// Resolves a route name and switches to it.
    pub fn navigate_named(&mut self, name: &str) -> Result<Route, RouteError> {
        let route = Route::from_name(name)?;
        self.navigate(route);
        Ok(route)
    }
}
