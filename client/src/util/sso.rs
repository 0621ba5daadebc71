//! Single-sign-on callback handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider redirects back to `/dashboard#session_id=<id>`. The
//! app router checks the fragment before routing and mounts the SSO callback
//! view, which trades the identifier for a backend session exactly once per
//! page load.
//!
//! ONE-SHOT
//! ========
//! `SsoLatch` is created once by `App`, not by the callback view, so remounts
//! and repeated effects share it. It is claimed before the first await, which
//! makes a second invocation observe the claim even if the first exchange is
//! still in flight.

#[cfg(test)]
#[path = "sso_test.rs"]
mod sso_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::backend::AuthBackend;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::session::Session;

const SESSION_ID_KEY: &str = "session_id";

/// Session identifier carried in a URL fragment (`#a=1&session_id=xyz`).
/// A missing or empty value yields `None`.
pub fn extract_session_id(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SESSION_ID_KEY)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Whether the fragment carries an SSO identifier awaiting exchange.
pub fn has_pending_exchange(fragment: &str) -> bool {
    extract_session_id(fragment).is_some()
}

/// One-shot guard for the SSO exchange.
#[derive(Clone, Debug, Default)]
pub struct SsoLatch {
    claimed: Arc<AtomicBool>,
}

impl SsoLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch. Only the first caller gets `true`.
    pub fn try_claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    #[cfg(test)]
    pub(crate) fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SsoOutcome {
    /// No identifier in the fragment; nothing was attempted.
    NoMarker,
    /// Another invocation already claimed the exchange.
    AlreadyHandled,
    SignedIn(User),
    Failed(ApiError),
}

/// Exchange the fragment's session identifier and store the resulting
/// identity in `session`.
pub async fn run_sso_exchange<B: AuthBackend + ?Sized>(
    latch: &SsoLatch,
    session: Session,
    backend: &B,
    fragment: &str,
) -> SsoOutcome {
    let Some(session_id) = extract_session_id(fragment) else {
        return SsoOutcome::NoMarker;
    };
    if !latch.try_claim() {
        return SsoOutcome::AlreadyHandled;
    }
    match backend.exchange_session(&session_id).await {
        Ok(user) => {
            session.set_user(user.clone());
            SsoOutcome::SignedIn(user)
        }
        Err(err) => {
            leptos::logging::warn!("sso exchange failed: {err}");
            SsoOutcome::Failed(err)
        }
    }
}
