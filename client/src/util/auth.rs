//! Route-guard decisions and login return paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` evaluates `evaluate_guard` reactively and hands the result to
//! `apply_guard_decision`. Keeping both as plain functions lets the redirect
//! rules be tested without a router.
//!
//! STATES
//! ======
//! Loading suspends every decision. Once loaded, an anonymous visitor is sent
//! to `/login?from=<path>`; a signed-in visitor lacking the admin role on an
//! admin route is sent to the default landing view with a notification.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use super::routes::{Access, DEFAULT_LANDING, HOME, LOGIN};
use crate::net::backend::AuthBackend;
use crate::net::error::ApiError;
use crate::state::session::{Session, SessionState, SessionStatus};
use crate::state::toast::Toasts;

pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to access that page.";

/// Outcome of evaluating a guarded route against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still bootstrapping; render a neutral placeholder.
    Loading,
    Render,
    RedirectToLogin { login_url: String },
    Forbidden { redirect_to: &'static str },
}

pub fn evaluate_guard(state: &SessionState, access: Access, requested_path: &str) -> GuardDecision {
    if access == Access::Public {
        return GuardDecision::Render;
    }
    if state.loading {
        return GuardDecision::Loading;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin { login_url: login_redirect_url(requested_path) },
        Some(user) if access == Access::Admin && !user.is_admin() => {
            GuardDecision::Forbidden { redirect_to: DEFAULT_LANDING }
        }
        Some(_) => GuardDecision::Render,
    }
}

/// Perform the navigation and notification a decision calls for.
pub fn apply_guard_decision<F>(decision: &GuardDecision, toasts: Toasts, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    match decision {
        GuardDecision::RedirectToLogin { login_url } => navigate(login_url, replace_options()),
        GuardDecision::Forbidden { redirect_to } => {
            toasts.error(PERMISSION_DENIED_MESSAGE);
            navigate(redirect_to, replace_options());
        }
        GuardDecision::Loading | GuardDecision::Render => {}
    }
}

/// Login URL that returns to `from` after a successful sign-in.
pub fn login_redirect_url(from: &str) -> String {
    format!("{LOGIN}?from={}", urlencoding::encode(from))
}

/// Validate a `from` query value. Only same-origin absolute paths are
/// accepted; everything else lands on the default view.
pub fn sanitize_return_path(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path.to_owned()
        }
        _ => DEFAULT_LANDING.to_owned(),
    }
}

/// Target for a visitor who is already signed in when a credential page
/// renders or completes. Credential pages navigate only through this, so a
/// successful sign-in produces a single redirect.
pub fn authenticated_redirect(status: &SessionStatus, return_to: &str) -> Option<String> {
    match status {
        SessionStatus::Authenticated(_) => Some(return_to.to_owned()),
        SessionStatus::Pending | SessionStatus::Anonymous => None,
    }
}

/// Leave the current view for `/`, then end the session. Navigating first
/// unmounts any guarded view before the identity clears, so the guard never
/// sees an anonymous session on a protected path.
///
/// # Errors
///
/// Returns the backend logout error after the session policy was applied.
pub async fn sign_out_and_leave<B, F>(session: Session, backend: &B, navigate: F) -> Result<(), ApiError>
where
    B: AuthBackend + ?Sized,
    F: FnOnce(&str),
{
    navigate(HOME);
    session.logout(backend).await
}

/// Navigation options for redirects that should not leave a history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
