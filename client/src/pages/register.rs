//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::sso_button::SsoButton;
use crate::net::backend::HttpAuthBackend;
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::auth::{authenticated_redirect, login_redirect_url, replace_options, sanitize_return_path};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const REGISTER_FAILED_MESSAGE: &str = "Could not create the account.";

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in your name, email and password.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = Session::expect();
    let toasts = Toasts::expect();
    let backend = expect_context::<HttpAuthBackend>();
    let navigate = use_navigate();
    let query = use_query_map();

    let return_to = Memo::new(move |_| query.with(|q| sanitize_return_path(q.get_str("from"))));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        let registration =
            match validate_registration_input(&name.get(), &email.get(), &password.get(), &confirm.get()) {
                Ok(registration) => registration,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            let Registration { name, email, password } = registration;
            match session.register(&backend, &name, &email, &password).await {
                // The session effect above performs the redirect.
                Ok(_) => toasts.success("Account created."),
                Err(e) => {
                    toasts.error(e.user_message(REGISTER_FAILED_MESSAGE));
                    busy.set(false);
                }
            }
        });
    };

    let text_input = move |signal: RwSignal<String>, kind: &'static str, autocomplete: &'static str| {
        view! {
            <input
                class="auth-input"
                type=kind
                autocomplete=autocomplete
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Hosting, domains and marketing in one place."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">"Full name" {text_input(name, "text", "name")}</label>
                    <label class="auth-form__label">"Email" {text_input(email, "email", "email")}</label>
                    <label class="auth-form__label">
                        "Password"
                        {text_input(password, "password", "new-password")}
                    </label>
                    <label class="auth-form__label">
                        "Confirm password"
                        {text_input(confirm, "password", "new-password")}
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__divider">"or"</div>
                <SsoButton label="Sign up with Google"/>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=move || login_redirect_url(&return_to.get())>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
