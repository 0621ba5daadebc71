use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::config::LogoutPolicy;
use crate::net::types::{AuthResponse, Role, User};

/// Backend that appends every logout call to a shared event log.
#[derive(Default)]
struct LoggingBackend {
    events: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl AuthBackend for LoggingBackend {
    async fn current_user(&self) -> Result<User, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.events.borrow_mut().push("logout".to_owned());
        Ok(())
    }

    async fn exchange_session(&self, _session_id: &str) -> Result<User, ApiError> {
        Err(ApiError::Unavailable)
    }
}

fn user(role: Role) -> User {
    User {
        user_id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role,
        picture: None,
    }
}

fn loaded(user: Option<User>) -> SessionState {
    SessionState { user, loading: false }
}

// =============================================================
// evaluate_guard
// =============================================================

#[test]
fn guard_waits_while_loading() {
    let state = SessionState::default();
    assert_eq!(evaluate_guard(&state, Access::Authenticated, "/dashboard"), GuardDecision::Loading);
    assert_eq!(evaluate_guard(&state, Access::Admin, "/admin"), GuardDecision::Loading);
}

#[test]
fn guard_renders_public_routes_even_while_loading() {
    assert_eq!(evaluate_guard(&SessionState::default(), Access::Public, "/"), GuardDecision::Render);
}

#[test]
fn guard_redirects_anonymous_visitor_with_return_path() {
    let decision = evaluate_guard(&loaded(None), Access::Authenticated, "/checkout/prod_1");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { login_url: "/login?from=%2Fcheckout%2Fprod_1".to_owned() }
    );
}

#[test]
fn guard_forbids_customer_on_admin_route() {
    let decision = evaluate_guard(&loaded(Some(user(Role::Customer))), Access::Admin, "/admin/orders");
    assert_eq!(decision, GuardDecision::Forbidden { redirect_to: "/dashboard" });
}

#[test]
fn guard_renders_for_authorized_users() {
    assert_eq!(
        evaluate_guard(&loaded(Some(user(Role::Customer))), Access::Authenticated, "/dashboard"),
        GuardDecision::Render
    );
    assert_eq!(
        evaluate_guard(&loaded(Some(user(Role::Admin))), Access::Admin, "/admin"),
        GuardDecision::Render
    );
}

// =============================================================
// apply_guard_decision
// =============================================================

#[test]
fn forbidden_decision_navigates_to_landing_and_notifies() {
    let toasts = Toasts::new(1_000);
    let visited = RefCell::new(Vec::new());
    let decision = GuardDecision::Forbidden { redirect_to: DEFAULT_LANDING };

    apply_guard_decision(&decision, toasts, |path, options| {
        assert!(options.replace);
        visited.borrow_mut().push(path.to_owned());
    });

    assert_eq!(*visited.borrow(), vec!["/dashboard".to_owned()]);
    let items = toasts.items_untracked();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message, PERMISSION_DENIED_MESSAGE);
}

#[test]
fn login_redirect_decision_navigates_without_notification() {
    let toasts = Toasts::new(1_000);
    let visited = RefCell::new(Vec::new());
    let decision = evaluate_guard(&loaded(None), Access::Authenticated, "/dashboard");

    apply_guard_decision(&decision, toasts, |path, _| visited.borrow_mut().push(path.to_owned()));

    assert_eq!(*visited.borrow(), vec!["/login?from=%2Fdashboard".to_owned()]);
    assert!(toasts.items_untracked().is_empty());
}

#[test]
fn render_and_loading_decisions_do_nothing() {
    let toasts = Toasts::new(1_000);
    for decision in [GuardDecision::Render, GuardDecision::Loading] {
        apply_guard_decision(&decision, toasts, |path, _| panic!("unexpected navigation to {path}"));
    }
    assert!(toasts.items_untracked().is_empty());
}

// =============================================================
// sanitize_return_path
// =============================================================

#[test]
fn sanitize_return_path_accepts_local_paths() {
    assert_eq!(sanitize_return_path(Some("/checkout/prod_1")), "/checkout/prod_1");
}

#[test]
fn sanitize_return_path_rejects_external_targets() {
    assert_eq!(sanitize_return_path(Some("https://evil.test")), "/dashboard");
    assert_eq!(sanitize_return_path(Some("//evil.test/x")), "/dashboard");
    assert_eq!(sanitize_return_path(Some("/\\evil.test")), "/dashboard");
    assert_eq!(sanitize_return_path(None), "/dashboard");
}

// =============================================================
// authenticated_redirect
// =============================================================

#[test]
fn authenticated_redirect_only_for_signed_in_visitors() {
    let signed_in = SessionStatus::Authenticated(user(Role::Customer));
    assert_eq!(authenticated_redirect(&signed_in, "/checkout/prod_1"), Some("/checkout/prod_1".to_owned()));
    assert_eq!(authenticated_redirect(&SessionStatus::Pending, "/checkout/prod_1"), None);
    assert_eq!(authenticated_redirect(&SessionStatus::Anonymous, "/checkout/prod_1"), None);
}

// =============================================================
// sign_out_and_leave
// =============================================================

#[test]
fn sign_out_navigates_home_before_clearing_session() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(user(Role::Customer));
    let backend = LoggingBackend::default();

    let result = block_on(sign_out_and_leave(session, &backend, |path| {
        let still_signed_in = session.user_untracked().is_some();
        backend.events.borrow_mut().push(format!("navigate:{path}:{still_signed_in}"));
    }));

    assert_eq!(result, Ok(()));
    assert_eq!(*backend.events.borrow(), vec!["navigate:/:true".to_owned(), "logout".to_owned()]);
    assert_eq!(session.user_untracked(), None);
}
