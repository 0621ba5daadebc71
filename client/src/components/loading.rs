//! Neutral placeholder shown while async state settles.

use leptos::prelude::*;

/// Full-width spinner. Rendered by the route guard while the session
/// bootstraps and by the SSO callback while the exchange runs, so both hydrate
/// against the same markup.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <span class="loading-screen__spinner" aria-hidden="true"></span>
            <span class="loading-screen__label">"Loading..."</span>
        </div>
    }
}
