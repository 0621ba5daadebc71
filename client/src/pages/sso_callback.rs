//! Landing view for the identity-provider redirect.
//!
//! Mounted by the app router whenever the URL fragment carries a
//! `session_id`. The exchange itself is latched in `util::sso`, so a remount
//! or a repeated effect run does not issue a second backend call.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingScreen;
use crate::net::backend::HttpAuthBackend;
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::auth::replace_options;
use crate::util::routes::{DASHBOARD, LOGIN};
use crate::util::sso::{SsoLatch, SsoOutcome, run_sso_exchange};

pub const SSO_FAILED_MESSAGE: &str = "Google sign-in failed. Please try again.";

#[component]
pub fn SsoCallbackPage() -> impl IntoView {
    let session = Session::expect();
    let toasts = Toasts::expect();
    let backend = expect_context::<HttpAuthBackend>();
    let latch = expect_context::<SsoLatch>();
    let navigate = use_navigate();

    Effect::new(move || {
        let latch = latch.clone();
        let navigate = navigate.clone();
        let fragment = crate::util::browser::current_fragment();
        leptos::task::spawn_local(async move {
            match run_sso_exchange(&latch, session, &backend, &fragment).await {
                SsoOutcome::SignedIn(user) => {
                    toasts.success(format!("Welcome, {}!", user.name));
                    navigate(DASHBOARD, replace_options());
                }
                SsoOutcome::Failed(e) => {
                    toasts.error(e.user_message(SSO_FAILED_MESSAGE));
                    navigate(LOGIN, replace_options());
                }
                SsoOutcome::NoMarker | SsoOutcome::AlreadyHandled => {}
            }
        });
    });

    view! { <LoadingScreen/> }
}
