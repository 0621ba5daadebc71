//! Fallback view for unknown paths.

use leptos::prelude::*;

use crate::util::routes::HOME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href=HOME class="btn btn--primary">"Back to home"</a>
        </div>
    }
}
