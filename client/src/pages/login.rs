//! Login page supporting email + password and Google SSO.
//!
//! A successful sign-in returns to the sanitized `from` query target, which
//! the route guard sets when it bounces an anonymous visitor here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::sso_button::SsoButton;
use crate::net::backend::HttpAuthBackend;
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::auth::{authenticated_redirect, replace_options, sanitize_return_path};
use crate::util::routes::REGISTER;

pub const LOGIN_FAILED_MESSAGE: &str = "Sign-in failed. Check your email and password.";

/// Trim the email and require both fields. The password is sent as typed.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::expect();
    let toasts = Toasts::expect();
    let backend = expect_context::<HttpAuthBackend>();
    let navigate = use_navigate();
    let query = use_query_map();

    let return_to = Memo::new(move |_| query.with(|q| sanitize_return_path(q.get_str("from"))));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the return target.
    Effect::new(move || {
        if let Some(target) = authenticated_redirect(&session.status(), &return_to.get_untracked()) {
            navigate(&target, replace_options());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match session.login(&backend, &email_value, &password_value).await {
                // The session effect above performs the redirect.
                Ok(_) => toasts.success("Signed in successfully."),
                Err(e) => {
                    toasts.error(e.user_message(LOGIN_FAILED_MESSAGE));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your services."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__divider">"or"</div>
                <SsoButton label="Continue with Google"/>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=move || register_href(&return_to.get())>"Create one"</a>
                </p>
            </div>
        </div>
    }
}

/// Register link that keeps the pending return target.
pub fn register_href(return_to: &str) -> String {
    format!("{REGISTER}?from={}", urlencoding::encode(return_to))
}
