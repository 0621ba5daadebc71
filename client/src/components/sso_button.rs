//! "Continue with Google" button that starts the SSO redirect.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::util::browser;

#[component]
pub fn SsoButton(#[prop(into)] label: String) -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    let on_click = move |_| {
        let Some(origin) = browser::current_origin() else {
            leptos::logging::warn!("sso start skipped: page origin unavailable");
            return;
        };
        browser::redirect_to(&config.sso_login_url(&origin));
    };

    view! {
        <button type="button" class="btn btn--outline auth-card__sso" on:click=on_click>
            {label}
        </button>
    }
}
