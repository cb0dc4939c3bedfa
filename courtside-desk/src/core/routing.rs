//! Role-based path routing
//!
//! Pure gating rules for the two role areas: admins live under
//! `/admin`, regular users under `/users`. Everything else funnels to
//! the login screen or the role home.

use shared::models::Role;

use super::session::{unix_now, AuthSession};

/// Outcome of resolving a navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Landing path for a role.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::User => "/users",
    }
}

/// Decide whether `path` may be shown for the given session.
///
/// - no (or expired) session anywhere but `/` redirects to `/`
/// - an authenticated visit to `/` redirects to the role home
/// - a path outside the session's own prefix redirects to the role home
pub fn resolve(path: &str, session: Option<&AuthSession>) -> RouteDecision {
    let session = match session {
        Some(s) if !s.is_expired(unix_now()) => s,
        _ => {
            if path == "/" {
                return RouteDecision::Allow;
            }
            return RouteDecision::Redirect("/".into());
        }
    };

    let home = role_home(session.role());
    if path == "/" {
        return RouteDecision::Redirect(home.into());
    }
    if path == home || path.starts_with(&format!("{}/", home)) {
        return RouteDecision::Allow;
    }
    RouteDecision::Redirect(home.into())
}
