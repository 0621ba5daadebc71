//! Access-control wrapper for protected and admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view. The access class comes from `access_for` on the
//! current path, so the route table cannot disagree with the classification.
//! The decision is a memo over the session state and the requested location,
//! so it re-runs whenever the identity, the loading flag or the path changes,
//! and the navigation effect only fires when the decision itself changes.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingScreen;
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::auth::{GuardDecision, apply_guard_decision, evaluate_guard};
use crate::util::routes::access_for;

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = Session::expect();
    let toasts = Toasts::expect();
    let location = use_location();
    let navigate = use_navigate();

    let requested = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        if search.is_empty() { path } else { format!("{path}?{search}") }
    });

    let access = Memo::new(move |_| location.pathname.with(|path| access_for(path)));
    let decision =
        Memo::new(move |_| requested.with(|path| evaluate_guard(&session.state(), access.get(), path)));

    Effect::new(move || {
        let decision = decision.get();
        apply_guard_decision(&decision, toasts, |url, options| navigate(url, options));
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardDecision::RedirectToLogin { .. } | GuardDecision::Forbidden { .. } => ().into_any(),
    }
}
