//! Contact form; submissions land in the admin message inbox.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::ContactMessageCreate;
use crate::state::toast::Toasts;

/// Build the submission payload. Name, email and message are required; an
/// empty phone number is omitted.
pub fn validate_contact_input(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> Result<ContactMessageCreate, &'static str> {
    let (name, email, phone, message) = (name.trim(), email.trim(), phone.trim(), message.trim());
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("Name, email and message are required.");
    }
    Ok(ContactMessageCreate {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        message: message.to_owned(),
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = Toasts::expect();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_contact_input(&name.get(), &email.get(), &phone.get(), &message.get()) {
            Ok(payload) => payload,
            Err(text) => {
                info.set(text.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact_message(&payload).await {
                Ok(_) => {
                    toasts.success("Message sent. We will get back to you soon.");
                    for field in [name, email, phone, message] {
                        field.set(String::new());
                    }
                }
                Err(e) => toasts.error(e.user_message("Could not send your message.")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="contact-page">
            <header class="page-header">
                <h1>"Contact us"</h1>
                <p>"Questions about a plan or an order? Send us a message."</p>
            </header>
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone (optional)"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send message" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="contact-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
