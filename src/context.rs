//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// The screens of the application. Switching is an in-app signal change,
/// not a browser navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Login,
    Home,
    History,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch to another screen
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}
