//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates exactly one `Session` at mount and provides it through
//! context. Route guards, the navigation bar and the credential pages read it;
//! only the operations on `Session` mutate it. The store holds no state beyond
//! the page lifetime: the backend-issued cookie is the only persistence.
//!
//! LIFECYCLE
//! =========
//! `Pending` until `bootstrap` settles, then `Authenticated` or `Anonymous`.
//! Login, registration and SSO move it to `Authenticated`; logout moves it to
//! `Anonymous`. A bootstrap result that arrives after one of those transitions
//! is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::{ClientConfig, LogoutPolicy};
use crate::net::backend::AuthBackend;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};

/// Raw session fields. `loading` is true until the bootstrap call settles.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Three-state view of the session consumed by the view layer.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    Pending,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            return SessionStatus::Pending;
        }
        match &self.user {
            Some(user) => SessionStatus::Authenticated(user.clone()),
            None => SessionStatus::Anonymous,
        }
    }

    /// Apply the bootstrap outcome. Returns `false` if the session already
    /// left the pending state.
    fn resolve(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }

    fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Shared session store. Cheap to copy; all copies address the same state.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<SessionState>,
    logout_policy: LogoutPolicy,
}

impl Session {
    pub fn new(logout_policy: LogoutPolicy) -> Self {
        Self { state: RwSignal::new(SessionState::default()), logout_policy }
    }

    /// Create the store for this app instance and register it in context.
    /// The underlying signal is disposed together with the calling owner.
    pub fn provide(config: &ClientConfig) -> Self {
        let session = Self::new(config.logout_policy);
        provide_context(session);
        on_cleanup(move || session.teardown());
        session
    }

    /// Fetch the store provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics if called outside the `App` component tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive snapshot of the raw fields.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Reactive three-state status.
    pub fn status(&self) -> SessionStatus {
        self.state.with(SessionState::status)
    }

    #[cfg(test)]
    pub(crate) fn status_untracked(&self) -> SessionStatus {
        self.state.with_untracked(SessionState::status)
    }

    /// Reactive current user.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    #[cfg(test)]
    pub(crate) fn user_untracked(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    /// Store an identity obtained outside the password flow (SSO exchange).
    pub fn set_user(&self, user: User) {
        self.state.update(|s| s.sign_in(user));
    }

    /// Resolve the initial identity from the backend session cookie.
    ///
    /// Any failure leaves the visitor anonymous; nothing is surfaced to the UI.
    pub async fn bootstrap<B: AuthBackend + ?Sized>(&self, backend: &B) {
        let user = match backend.current_user().await {
            Ok(user) => Some(user),
            Err(err) => {
                if err.status() != Some(401) {
                    leptos::logging::warn!("session bootstrap failed: {err}");
                }
                None
            }
        };
        let applied = self.state.try_update(|s| s.resolve(user)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("session bootstrap result dropped; session already resolved");
        }
    }

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Propagates the backend error untouched; the session is not modified.
    pub async fn login<B: AuthBackend + ?Sized>(
        &self,
        backend: &B,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = backend.login(email, password).await?;
        self.set_user(response.user.clone());
        Ok(response)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Propagates the backend error untouched; the session is not modified.
    pub async fn register<B: AuthBackend + ?Sized>(
        &self,
        backend: &B,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = backend.register(name, email, password).await?;
        self.set_user(response.user.clone());
        Ok(response)
    }

    /// End the session. The local identity is cleared after the backend call
    /// settles; on failure the configured `LogoutPolicy` decides.
    ///
    /// # Errors
    ///
    /// Returns the backend error, after applying the policy.
    pub async fn logout<B: AuthBackend + ?Sized>(&self, backend: &B) -> Result<(), ApiError> {
        let result = backend.logout().await;
        match (&result, self.logout_policy) {
            (Ok(()), _) | (Err(_), LogoutPolicy::AlwaysClear) => {
                self.state.update(SessionState::sign_out);
            }
            (Err(err), LogoutPolicy::ClearOnSuccess) => {
                leptos::logging::warn!("logout failed, keeping local session: {err}");
            }
        }
        result
    }

    /// Drop the cached identity when the owning app unmounts.
    pub fn teardown(&self) {
        let _ = self.state.try_update(SessionState::sign_out);
    }
}
