//! Top navigation bar with session-aware actions.
//!
//! Logout leaves for `/` before the session clears, so a guarded view being
//! left behind never bounces to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::backend::HttpAuthBackend;
use crate::state::session::{Session, SessionStatus};
use crate::util::auth::sign_out_and_leave;
use crate::util::routes::{ABOUT, ADMIN, CONTACT, DASHBOARD, HOME, LOGIN, PLANS, REGISTER};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = Session::expect();
    let backend = expect_context::<HttpAuthBackend>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let leave = move |path: &str| navigate(path, NavigateOptions::default());
            if let Err(e) = sign_out_and_leave(session, &backend, leave).await {
                leptos::logging::warn!("logout request failed: {e}");
            }
            busy.set(false);
        });
    };

    view! {
        <header class="navbar">
            <a href=HOME class="navbar__brand">"Igate Host"</a>
            <nav class="navbar__links">
                <a href=HOME>"Home"</a>
                <a href=PLANS>"Plans"</a>
                <a href=ABOUT>"About"</a>
                <a href=CONTACT>"Contact"</a>
            </nav>
            <div class="navbar__session">
                {move || match session.status() {
                    SessionStatus::Pending => view! { <span class="navbar__pending"></span> }.into_any(),
                    SessionStatus::Anonymous => view! {
                        <a href=LOGIN class="btn btn--ghost">"Sign in"</a>
                        <a href=REGISTER class="btn btn--primary">"Create account"</a>
                    }
                    .into_any(),
                    SessionStatus::Authenticated(user) => {
                        let is_admin = user.is_admin();
                        view! {
                            <Show when=move || is_admin>
                                <a href=ADMIN class="btn btn--ghost">"Admin"</a>
                            </Show>
                            <a href=DASHBOARD class="btn btn--ghost">"Dashboard"</a>
                            <span class="navbar__user" title=user.email.clone()>{user.name.clone()}</span>
                            <button
                                class="btn navbar__logout"
                                on:click=on_logout.clone()
                                disabled=move || busy.get()
                            >
                                "Logout"
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </header>
    }
}
