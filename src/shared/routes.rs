//! Route table and history navigation
//!
//! The app has three screens, each bound to one browser-style path. `History`
//! keeps a back/forward stack of visited routes the way a browser history
//! does, and maps paths to and from their base-path-prefixed form.

use crate::shared::config::normalize_base_path;
use crate::shared::error::RouteError;

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
}

impl View {
    /// Path bound to this view in [`ROUTES`]
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Login => "/login",
            View::Register => "/register",
        }
    }
}

/// A path bound to a named view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub static ROUTES: [Route; 3] = [
    Route {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    Route {
        path: "/login",
        name: "Login",
        view: View::Login,
    },
    Route {
        path: "/register",
        name: "Register",
        view: View::Register,
    },
];

/// Exact match on path; a single trailing slash is ignored
pub fn resolve(path: &str) -> Option<&'static Route> {
    let normalized = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

pub fn route_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

pub fn route_for(view: View) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| route.view == view)
        .unwrap_or(&ROUTES[0])
}

/// Back/forward navigation over [`ROUTES`]
#[derive(Debug, Clone)]
pub struct History {
    base_path: String,
    entries: Vec<&'static Route>,
    cursor: usize,
}

impl History {
    /// Start at `/`. `app`, `/app` and `/app/` all give the base path `/app/`.
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            entries: vec![&ROUTES[0]],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &'static Route {
        self.entries[self.cursor]
    }

    /// Navigate to `path`, dropping any forward entries.
    ///
    /// Pushing the current path leaves the history unchanged.
    pub fn push(&mut self, path: &str) -> Result<&'static Route, RouteError> {
        let route = resolve(path).ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        if route == self.current() {
            return Ok(route);
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor += 1;
        tracing::debug!(from = self.entries[self.cursor - 1].path, to = route.path, "navigate");
        Ok(route)
    }

    pub fn navigate_to(&mut self, view: View) -> &'static Route {
        let route = route_for(view);
        // Every view has a route, so this never fails.
        let _ = self.push(route.path);
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<&'static Route> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&'static Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Browser-visible location for `route`
    pub fn href(&self, route: &Route) -> String {
        format!("{}{}", self.base_path, route.path.trim_start_matches('/'))
    }

    /// Route path for a browser-visible location, if it lies under the base path
    pub fn strip_base(&self, location: &str) -> Option<String> {
        if location == self.base_path.trim_end_matches('/') {
            return Some("/".to_string());
        }
        location
            .strip_prefix(&self.base_path)
            .map(|rest| format!("/{}", rest))
    }

    /// Navigate to a browser-visible location
    pub fn open(&mut self, location: &str) -> Result<&'static Route, RouteError> {
        let path = self
            .strip_base(location)
            .ok_or_else(|| RouteError::NotFound(location.to_string()))?;
        self.push(&path)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}
