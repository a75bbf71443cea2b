//! Navigation guard evaluated before every route transition. The decision is a
//! pure function of the target route's metadata and the current session flags;
//! session state is assumed settled by the awaited hydration step.

use crate::router::routes::{self, paths};
use crate::session::SessionFlags;

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition proceed unchanged.
    Allow,
    /// Redirect to the given path instead.
    Redirect(&'static str),
}

/// Decides whether a transition to `target` may proceed. Policy, in priority
/// order: auth-gated targets bounce unauthenticated sessions to the login
/// page; admin-gated targets bounce non-admins to the dashboard; the login and
/// landing pages bounce already-authenticated sessions to the dashboard;
/// everything else is allowed.
///
/// UX-only guard; real access control must live on the API.
#[must_use]
pub fn decide(target: &str, flags: SessionFlags) -> GuardDecision {
    let meta = routes::resolve(target)
        .map(|route| route.meta)
        .unwrap_or_default();
    let normalized = routes::normalize(target);

    if meta.requires_auth && !flags.is_authenticated {
        GuardDecision::Redirect(paths::LOGIN)
    } else if meta.requires_admin && !flags.is_admin {
        GuardDecision::Redirect(paths::DASHBOARD)
    } else if (normalized == paths::LOGIN || normalized == paths::LANDING)
        && flags.is_authenticated
    {
        GuardDecision::Redirect(paths::DASHBOARD)
    } else {
        GuardDecision::Allow
    }
}
