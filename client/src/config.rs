//! Client runtime configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `ClientConfig` and provides it through context. The
//! session store reads the logout policy and bootstrap deadline from it; the
//! login page builds the identity-provider redirect from it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// External identity provider that issues SSO session identifiers.
pub const IDENTITY_PROVIDER_URL: &str = "https://auth.emergentagent.com";

/// Path the identity provider sends the browser back to. The session
/// identifier arrives in the URL fragment of this page.
pub const SSO_CALLBACK_PATH: &str = "/dashboard";

pub const DEFAULT_BOOTSTRAP_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_TOAST_LIFETIME_MS: u32 = 4_000;

/// What `logout` does with the local identity when the backend call fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoutPolicy {
    /// Clear the identity once the request settles, whatever the outcome.
    #[default]
    AlwaysClear,
    /// Clear only after the backend confirmed the logout. A failed request
    /// leaves the identity in place so the user can retry.
    ClearOnSuccess,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub identity_provider_url: String,
    pub sso_callback_path: String,
    /// Upper bound on the initial "who am I" call.
    pub bootstrap_timeout_ms: u32,
    pub logout_policy: LogoutPolicy,
    /// How long a toast stays visible before auto-dismissal.
    pub toast_lifetime_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            identity_provider_url: IDENTITY_PROVIDER_URL.to_owned(),
            sso_callback_path: SSO_CALLBACK_PATH.to_owned(),
            bootstrap_timeout_ms: DEFAULT_BOOTSTRAP_TIMEOUT_MS,
            logout_policy: LogoutPolicy::default(),
            toast_lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
        }
    }
}

impl ClientConfig {
    /// URL that starts the SSO flow for a page served from `origin`.
    ///
    /// The redirect target is always this application's own origin plus the
    /// fixed callback path; the identity provider rejects anything else.
    pub fn sso_login_url(&self, origin: &str) -> String {
        let redirect = format!("{}{}", origin.trim_end_matches('/'), self.sso_callback_path);
        format!(
            "{}/?redirect={}",
            self.identity_provider_url.trim_end_matches('/'),
            urlencoding::encode(&redirect)
        )
    }
}
