//! Application routes

use std::fmt;

use serde::Serialize;

/// Every view the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Signup,
    Home,
    Dashboard,
    Medications,
    NotFound,
}

impl Route {
    /// Resolve a path to a route. Unknown paths map to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/home" => Route::Home,
            "/dashboard" => Route::Dashboard,
            "/medications" => Route::Medications,
            _ => Route::NotFound,
        }
    }

    /// Canonical path, `None` for the catch-all
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Login => Some("/login"),
            Route::Signup => Some("/signup"),
            Route::Home => Some("/home"),
            Route::Dashboard => Some("/dashboard"),
            Route::Medications => Some("/medications"),
            Route::NotFound => None,
        }
    }

    /// Whether the session guard wraps this route
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Medications)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().unwrap_or("*"))
    }
}
