//! Admin inbox for contact-form messages.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::ContactMessage;
use crate::pages::dashboard::newest_first;
use crate::state::toast::Toasts;
use crate::util::format::short_date;

pub fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

#[component]
pub fn AdminMessagesPage() -> impl IntoView {
    let toasts = Toasts::expect();
    let messages = LocalResource::new(|| api::fetch_admin_messages());
    let expanded = RwSignal::new(None::<String>);

    // Opening an unread message marks it read.
    let open = move |message: ContactMessage| {
        expanded.set(Some(message.message_id.clone()));
        if message.is_read {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::mark_message_read(&message.message_id).await {
                Ok(()) => messages.refetch(),
                Err(e) => toasts.error(e.user_message("Could not update the message.")),
            }
        });
    };

    view! {
        <div class="admin-page">
            <h1>"Messages"</h1>
            <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                {move || {
                    messages.get().map(|result| match result {
                        Ok(list) => {
                            let unread = unread_count(&list);
                            view! {
                                <p class="admin-page__summary">{format!("{unread} unread")}</p>
                                <ul class="message-list">
                                    {newest_first(list, |m| m.created_at.as_str())
                                        .into_iter()
                                        .map(|message| {
                                            let id = message.message_id.clone();
                                            let body = message.message.clone();
                                            let class = if message.is_read {
                                                "message-list__item"
                                            } else {
                                                "message-list__item is-unread"
                                            };
                                            let for_open = message.clone();
                                            view! {
                                                <li class=class>
                                                    <button
                                                        class="message-list__header"
                                                        on:click=move |_| open(for_open.clone())
                                                    >
                                                        <strong>{message.name.clone()}</strong>
                                                        <span>{message.email.clone()}</span>
                                                        <span>{message.phone.clone().unwrap_or_default()}</span>
                                                        <span>{short_date(&message.created_at).to_owned()}</span>
                                                    </button>
                                                    <Show when=move || {
                                                        expanded.with(|current| current.as_deref() == Some(id.as_str()))
                                                    }>
                                                        <p class="message-list__body">{body.clone()}</p>
                                                    </Show>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(e) => view! {
                            <p class="admin-page__error">{e.user_message("Could not load messages.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
