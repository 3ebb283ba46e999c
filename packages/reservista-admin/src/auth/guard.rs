//! Route guard for the dashboard pages.

use std::fmt;

use super::SessionUser;

/// Pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Users,
    Tables,
    Reservations,
    Menu,
    Images,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Landing,
        Route::Login,
        Route::Dashboard,
        Route::Users,
        Route::Tables,
        Route::Reservations,
        Route::Menu,
        Route::Images,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Users => "/users",
            Route::Tables => "/tables",
            Route::Reservations => "/reservations",
            Route::Menu => "/menu",
            Route::Images => "/images",
        }
    }

    /// Maps a path to its page. Nested paths such as `/menu/new` belong to
    /// their first segment.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Landing);
        }
        let first = trimmed
            .strip_prefix('/')?
            .split('/')
            .next()
            .unwrap_or_default();
        Route::ALL
            .into_iter()
            .find(|route| *route != Route::Landing && &route.path()[1..] == first)
    }

    /// Returns `true` for pages that require a signed-in user.
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Landing | Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Returns the page to show for a request to `route`.
///
/// Signed-out users are sent to the login page from protected pages and the
/// landing page. Signed-in users are sent to the dashboard from the login
/// and landing pages.
pub fn resolve(route: Route, session: Option<&SessionUser>) -> Route {
    match (route, session) {
        (Route::Landing | Route::Login, Some(_)) => Route::Dashboard,
        (Route::Landing, None) => Route::Login,
        (route, None) if route.is_protected() => Route::Login,
        (route, _) => route,
    }
}
