use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::types::Role;

// =============================================================
// ScriptedBackend
// =============================================================

#[derive(Default)]
struct ScriptedBackend {
    current_user: RefCell<Option<Result<User, ApiError>>>,
    login: RefCell<Option<Result<AuthResponse, ApiError>>>,
    logout: RefCell<Option<Result<(), ApiError>>>,
    login_calls: Cell<u32>,
}

impl ScriptedBackend {
    fn with_current_user(result: Result<User, ApiError>) -> Self {
        Self { current_user: RefCell::new(Some(result)), ..Self::default() }
    }

    fn with_login(result: Result<AuthResponse, ApiError>) -> Self {
        Self { login: RefCell::new(Some(result)), ..Self::default() }
    }

    fn with_logout(result: Result<(), ApiError>) -> Self {
        Self { logout: RefCell::new(Some(result)), ..Self::default() }
    }
}

#[async_trait(?Send)]
impl AuthBackend for ScriptedBackend {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.current_user
            .borrow_mut()
            .take()
            .unwrap_or(Err(ApiError::from_response(401, r#"{"detail":"Not authenticated"}"#)))
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login.borrow_mut().take().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        Ok(AuthResponse { token: Some("jwt".to_owned()), user: user(name, email, Role::Customer) })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout.borrow_mut().take().unwrap_or(Ok(()))
    }

    async fn exchange_session(&self, _session_id: &str) -> Result<User, ApiError> {
        Err(ApiError::Unavailable)
    }
}

fn user(name: &str, email: &str, role: Role) -> User {
    User {
        user_id: format!("user_{name}"),
        email: email.to_owned(),
        name: name.to_owned(),
        role,
        picture: None,
    }
}

fn alice() -> User {
    user("alice", "alice@example.com", Role::Customer)
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn new_session_is_pending() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    assert_eq!(session.status_untracked(), SessionStatus::Pending);
}

#[test]
fn status_reflects_user_once_loaded() {
    let state = SessionState { user: Some(alice()), loading: false };
    assert_eq!(state.status(), SessionStatus::Authenticated(alice()));
    let state = SessionState { user: None, loading: false };
    assert_eq!(state.status(), SessionStatus::Anonymous);
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_without_cookie_resolves_anonymous() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.bootstrap(&ScriptedBackend::default()));
    let state = session.state.get_untracked();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn bootstrap_with_cookie_resolves_user() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.bootstrap(&ScriptedBackend::with_current_user(Ok(alice()))));
    assert_eq!(session.status_untracked(), SessionStatus::Authenticated(alice()));
}

#[test]
fn bootstrap_timeout_resolves_anonymous() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.bootstrap(&ScriptedBackend::with_current_user(Err(ApiError::Timeout))));
    assert_eq!(session.status_untracked(), SessionStatus::Anonymous);
}

#[test]
fn late_bootstrap_does_not_overwrite_login() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(alice());
    block_on(session.bootstrap(&ScriptedBackend::default()));
    assert_eq!(session.user_untracked(), Some(alice()));
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_success_stores_returned_user_and_returns_payload() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.bootstrap(&ScriptedBackend::default()));
    let response = AuthResponse { token: Some("jwt".to_owned()), user: alice() };
    let backend = ScriptedBackend::with_login(Ok(response.clone()));

    let result = block_on(session.login(&backend, "alice@example.com", "secret"));

    assert_eq!(result, Ok(response));
    assert_eq!(session.user_untracked(), Some(alice()));
    assert_eq!(backend.login_calls.get(), 1);
}

#[test]
fn login_failure_propagates_error_and_keeps_identity() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.bootstrap(&ScriptedBackend::default()));
    let err = ApiError::from_response(401, r#"{"detail":"Invalid credentials"}"#);
    let backend = ScriptedBackend::with_login(Err(err.clone()));

    let result = block_on(session.login(&backend, "alice@example.com", "wrong"));

    assert_eq!(result, Err(err));
    assert_eq!(session.status_untracked(), SessionStatus::Anonymous);
}

#[test]
fn login_failure_keeps_previous_user() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(alice());
    let backend = ScriptedBackend::with_login(Err(ApiError::Network("offline".to_owned())));

    let result = block_on(session.login(&backend, "bob@example.com", "pw"));

    assert!(result.is_err());
    assert_eq!(session.user_untracked(), Some(alice()));
}

#[test]
fn register_success_signs_in_new_user() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let response = block_on(session.register(&ScriptedBackend::default(), "carol", "carol@example.com", "secret1"))
        .unwrap();
    assert_eq!(response.user.name, "carol");
    assert_eq!(session.user_untracked().map(|u| u.email), Some("carol@example.com".to_owned()));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_identity() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(alice());
    let result = block_on(session.logout(&ScriptedBackend::default()));
    assert_eq!(result, Ok(()));
    assert_eq!(session.status_untracked(), SessionStatus::Anonymous);
}

#[test]
fn logout_always_clear_clears_even_when_request_fails() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(alice());
    let backend = ScriptedBackend::with_logout(Err(ApiError::Network("offline".to_owned())));

    let result = block_on(session.logout(&backend));

    assert!(result.is_err());
    assert_eq!(session.user_untracked(), None);
}

#[test]
fn logout_clear_on_success_keeps_identity_when_request_fails() {
    let session = Session::new(LogoutPolicy::ClearOnSuccess);
    session.set_user(alice());
    let backend = ScriptedBackend::with_logout(Err(ApiError::Network("offline".to_owned())));

    let result = block_on(session.logout(&backend));

    assert!(result.is_err());
    assert_eq!(session.user_untracked(), Some(alice()));
}

#[test]
fn logout_while_anonymous_stays_anonymous() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    block_on(session.logout(&ScriptedBackend::default())).unwrap();
    assert_eq!(session.status_untracked(), SessionStatus::Anonymous);
}

#[test]
fn teardown_clears_identity() {
    let session = Session::new(LogoutPolicy::AlwaysClear);
    session.set_user(alice());
    session.teardown();
    assert_eq!(session.user_untracked(), None);
}
