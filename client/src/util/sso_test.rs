use std::cell::Cell;

use async_trait::async_trait;
use futures::executor::block_on;
use futures::future::join;

use super::*;
use crate::config::LogoutPolicy;
use crate::net::types::{AuthResponse, Role};
use crate::state::session::SessionStatus;

struct ExchangeBackend {
    exchanges: Cell<u32>,
    fail: bool,
}

impl ExchangeBackend {
    fn ok() -> Self {
        Self { exchanges: Cell::new(0), fail: false }
    }

    fn failing() -> Self {
        Self { exchanges: Cell::new(0), fail: true }
    }
}

#[async_trait(?Send)]
impl AuthBackend for ExchangeBackend {
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
        Ok(())
    }

    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError> {
        self.exchanges.set(self.exchanges.get() + 1);
        if self.fail {
            return Err(ApiError::from_response(401, r#"{"detail":"Invalid session"}"#));
        }
        Ok(User {
            user_id: "user_sso".to_owned(),
            email: format!("{session_id}@sso.test"),
            name: "SSO User".to_owned(),
            role: Role::Customer,
            picture: Some("https://img.test/a.png".to_owned()),
        })
    }
}

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn extract_session_id_reads_value() {
    assert_eq!(extract_session_id("#session_id=abc123"), Some("abc123".to_owned()));
    assert_eq!(extract_session_id("state=x&session_id=abc&y=1"), Some("abc".to_owned()));
}

#[test]
fn extract_session_id_ignores_missing_or_empty() {
    assert_eq!(extract_session_id(""), None);
    assert_eq!(extract_session_id("#"), None);
    assert_eq!(extract_session_id("#session_id="), None);
    assert_eq!(extract_session_id("#other_session_id=abc"), None);
}

#[test]
fn has_pending_exchange_matches_extraction() {
    assert!(has_pending_exchange("#session_id=abc"));
    assert!(!has_pending_exchange("#section-2"));
}

// =============================================================
// Latch
// =============================================================

#[test]
fn latch_claims_once_across_clones() {
    let latch = SsoLatch::new();
    let other = latch.clone();
    assert!(latch.try_claim());
    assert!(!other.try_claim());
    assert!(other.is_claimed());
}

// =============================================================
// run_sso_exchange
// =============================================================

#[test]
fn exchange_success_sets_session_user() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::ok();

    let outcome = block_on(run_sso_exchange(&latch, session, &backend, "#session_id=abc"));

    let SsoOutcome::SignedIn(user) = outcome else {
        panic!("expected sign-in, got {outcome:?}");
    };
    assert_eq!(user.email, "abc@sso.test");
    assert_eq!(session.status_untracked(), SessionStatus::Authenticated(user));
}

#[test]
fn signed_in_outcome_compares_by_user() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::ok();

    let outcome = block_on(run_sso_exchange(&latch, session, &backend, "#session_id=abc"));

    let expected = session.user_untracked().map(SsoOutcome::SignedIn);
    assert_eq!(Some(outcome.clone()), expected);
    assert_ne!(outcome, SsoOutcome::AlreadyHandled);
}

#[test]
fn exchange_invoked_twice_calls_backend_once() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::ok();

    let first = block_on(run_sso_exchange(&latch, session, &backend, "#session_id=abc"));
    let second = block_on(run_sso_exchange(&latch, session, &backend, "#session_id=abc"));

    assert!(matches!(first, SsoOutcome::SignedIn(_)));
    assert_eq!(second, SsoOutcome::AlreadyHandled);
    assert_eq!(backend.exchanges.get(), 1);
}

#[test]
fn concurrent_invocations_call_backend_once() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::ok();

    let (a, b) = block_on(join(
        run_sso_exchange(&latch, session, &backend, "#session_id=abc"),
        run_sso_exchange(&latch, session, &backend, "#session_id=abc"),
    ));

    assert_eq!(backend.exchanges.get(), 1);
    assert!(matches!((&a, &b), (SsoOutcome::SignedIn(_), SsoOutcome::AlreadyHandled)));
}

#[test]
fn exchange_failure_leaves_session_untouched() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::failing();

    let outcome = block_on(run_sso_exchange(&latch, session, &backend, "#session_id=bad"));

    assert!(matches!(outcome, SsoOutcome::Failed(ApiError::Status { status: 401, .. })));
    assert_eq!(session.user_untracked(), None);
}

#[test]
fn fragment_without_marker_does_not_claim_latch() {
    let latch = SsoLatch::new();
    let session = Session::new(LogoutPolicy::AlwaysClear);
    let backend = ExchangeBackend::ok();

    let outcome = block_on(run_sso_exchange(&latch, session, &backend, "#top"));

    assert_eq!(outcome, SsoOutcome::NoMarker);
    assert!(!latch.is_claimed());
    assert_eq!(backend.exchanges.get(), 0);
}
