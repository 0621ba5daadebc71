//! Catalog card and billing-period toggle shared by the home and plans pages.

use leptos::prelude::*;

use crate::net::types::{DEFAULT_CURRENCY, PlanDuration, Product};
use crate::util::format::{format_price, plan_label};
use crate::util::routes::checkout_path;

/// Monthly/yearly switch bound to `duration`.
#[component]
pub fn BillingToggle(duration: RwSignal<PlanDuration>) -> impl IntoView {
    let option = move |value: PlanDuration| {
        view! {
            <button
                type="button"
                class=move || {
                    if duration.get() == value { "billing-toggle__option is-active" } else { "billing-toggle__option" }
                }
                on:click=move |_| duration.set(value)
            >
                {plan_label(value)}
            </button>
        }
    };

    view! {
        <div class="billing-toggle" role="group" aria-label="Billing period">
            {option(PlanDuration::Monthly)}
            {option(PlanDuration::Yearly)}
            <span class="billing-toggle__badge">"Save 20% yearly"</span>
        </div>
    }
}

#[component]
pub fn PlanCard(product: Product, #[prop(into)] duration: Signal<PlanDuration>) -> impl IntoView {
    let popular = product.is_popular;
    let class = if popular { "plan-card plan-card--popular" } else { "plan-card" };
    let price = {
        let product = product.clone();
        move || format_price(product.price_for(duration.get()), DEFAULT_CURRENCY)
    };
    let period = move || match duration.get() {
        PlanDuration::Monthly => "/ month",
        PlanDuration::Yearly => "/ year",
    };
    let order_href = checkout_path(&product.product_id);

    view! {
        <article class=class>
            <Show when=move || popular>
                <span class="plan-card__badge">"Most popular"</span>
            </Show>
            <h3 class="plan-card__name">{product.name_en.clone()}</h3>
            <p class="plan-card__description">{product.description_en.clone()}</p>
            <p class="plan-card__price">
                <span class="plan-card__amount">{price}</span>
                <span class="plan-card__period">{period}</span>
            </p>
            <ul class="plan-card__features">
                {product.features.iter().map(|feature| view! { <li>{feature.clone()}</li> }).collect::<Vec<_>>()}
            </ul>
            <a href=order_href class="btn btn--primary plan-card__order">"Order now"</a>
        </article>
    }
}
