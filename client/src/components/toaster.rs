//! Toast stack rendered in the bottom corner of every page.

use leptos::prelude::*;

use crate::state::toast::Toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = Toasts::expect();

    view! {
        <div class="toaster" aria-live="assertive">
            <For each=move || toasts.items() key=|toast| toast.id let:toast>
                <div class=toast.kind.css_class() role="alert">
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
