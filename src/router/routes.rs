//! Static route table for the app shell. Paths and access metadata are fixed
//! configuration; views themselves live in the shell, so routes reference them
//! by identifier only.

/// Route path constants shared by the guard and the shells.
pub mod paths {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const REMINDER_NEW: &str = "/reminders/new";
    pub const REMINDER_EDIT: &str = "/reminders/:id/edit";
    pub const ADMIN: &str = "/admin";
}

/// View rendered by a route. The shell maps these to its own components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Login,
    Dashboard,
    ReminderForm,
    Admin,
}

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

/// A navigable route: path pattern, name, view reference, and access metadata.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

/// The full route surface of the app.
pub const ROUTES: &[Route] = &[
    Route {
        path: paths::LANDING,
        name: "Landing",
        view: View::Landing,
        meta: RouteMeta {
            requires_auth: false,
            requires_admin: false,
        },
    },
    Route {
        path: paths::LOGIN,
        name: "Login",
        view: View::Login,
        meta: RouteMeta {
            requires_auth: false,
            requires_admin: false,
        },
    },
    Route {
        path: paths::DASHBOARD,
        name: "Dashboard",
        view: View::Dashboard,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
        },
    },
    Route {
        path: paths::REMINDER_NEW,
        name: "NewReminder",
        view: View::ReminderForm,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
        },
    },
    Route {
        path: paths::REMINDER_EDIT,
        name: "EditReminder",
        view: View::ReminderForm,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
        },
    },
    Route {
        path: paths::ADMIN,
        name: "Admin",
        view: View::Admin,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: true,
        },
    },
];

/// Resolves a concrete path against the route table, honoring `:param`
/// segments. Returns `None` for paths outside the route surface.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|route| matches_pattern(route.path, path))
}

/// Strips a trailing slash from non-root paths so `/dashboard/` resolves.
pub(crate) fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Segment-wise pattern match; `:param` segments match any non-empty segment.
fn matches_pattern(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = normalize(pattern).split('/').collect();
    let path_segments: Vec<&str> = normalize(path).split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern_segment, path_segment)| {
            if pattern_segment.starts_with(':') {
                !path_segment.is_empty()
            } else {
                pattern_segment == path_segment
            }
        })
}
