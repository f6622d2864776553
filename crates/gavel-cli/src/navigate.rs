//! Navigator implementation for the terminal.
//!
//! The CLI has no router; navigation targets are announced on stderr and
//! the current route is tracked so the reload trigger has something to
//! re-run.

use std::sync::Mutex;

use colored::Colorize;

use gavel_core::traits::{Navigator, Route};

pub struct CliNavigator {
    current: Mutex<Route>,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Route::Login),
        }
    }

    /// Record the route the running command corresponds to.
    pub fn set_current(&self, route: Route) {
        if let Ok(mut guard) = self.current.lock() {
            *guard = route;
        }
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        match &route {
            Route::Login => {
                eprintln!("{}", "Session rejected; run 'gavel login'.".yellow());
            }
            Route::Error403 => {
                eprintln!("{}", "403: you are not allowed to do that.".red());
            }
            Route::Error404 => {
                eprintln!("{}", "404: no such thing.".red());
            }
            _ => {}
        }
        self.set_current(route);
    }

    fn current(&self) -> Route {
        self.current
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(Route::Login)
    }
}
