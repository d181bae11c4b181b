//! Router - maps paths to views, sending guarded routes through the session guard

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::Route;
use crate::services::session::SessionGuard;

/// What the app should do for a requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Navigation {
    Render { route: Route },
    Redirect { from: Route, to: Route },
}

impl Navigation {
    /// The route that ends up on screen
    pub fn target(&self) -> Route {
        match self {
            Navigation::Render { route } => *route,
            Navigation::Redirect { to, .. } => *to,
        }
    }
}

pub struct Router {
    guard: SessionGuard,
}

impl Router {
    pub fn new(guard: SessionGuard) -> Self {
        Self { guard }
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Decide what to show for `path`
    pub fn navigate(&self, path: &str) -> Result<Navigation> {
        let route = Route::from_path(path);
        if route.requires_session() && !self.guard.check()?.is_authorized() {
            tracing::debug!("Redirecting {} to {}", route, Route::Login);
            return Ok(Navigation::Redirect {
                from: route,
                to: Route::Login,
            });
        }
        Ok(Navigation::Render { route })
    }
}
