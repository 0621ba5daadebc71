//! Credential backend seam used by the session store.
//!
//! DESIGN
//! ======
//! The session store talks to the backend only through `AuthBackend`, so the
//! credential flow can be driven by a scripted backend in tests while the
//! browser build uses `HttpAuthBackend` over `net::api`.

use async_trait::async_trait;

use super::api;
use super::error::ApiError;
use super::types::{AuthResponse, User};
use crate::config::ClientConfig;

/// Backend operations behind the session store.
///
/// `?Send` because the browser runtime is single-threaded and `gloo-net`
/// futures are not `Send`.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Resolve the identity behind the current session cookie.
    ///
    /// # Errors
    ///
    /// Any failure (401, network, timeout) means "no identity".
    async fn current_user(&self) -> Result<User, ApiError>;

    /// # Errors
    ///
    /// Returns the backend rejection unchanged.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// # Errors
    ///
    /// Returns the backend rejection unchanged.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// # Errors
    ///
    /// Returns an error if the backend did not confirm the logout.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Trade a one-time SSO identifier for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity provider rejects the identifier.
    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError>;
}

/// `AuthBackend` over the real REST API.
#[derive(Clone, Copy, Debug)]
pub struct HttpAuthBackend {
    /// Deadline for `current_user`; elapsed deadlines surface as `ApiError::Timeout`.
    pub bootstrap_timeout_ms: u32,
}

impl HttpAuthBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self { bootstrap_timeout_ms: config.bootstrap_timeout_ms }
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let request = Box::pin(api::fetch_current_user());
            let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(self.bootstrap_timeout_ms));
            match select(request, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            api::fetch_current_user().await
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        api::login(email, password).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        api::register(name, email, password).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        api::logout().await
    }

    async fn exchange_session(&self, session_id: &str) -> Result<User, ApiError> {
        api::exchange_session(session_id).await
    }
}
