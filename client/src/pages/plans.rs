//! Full catalog, one tab per product category.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::components::plan_card::{BillingToggle, PlanCard};
use crate::net::types::{PlanDuration, Product, ProductCategory};

/// Products of `category`, popular plans first, otherwise in catalog order.
pub fn products_in_category(products: &[Product], category: ProductCategory) -> Vec<Product> {
    let mut matching: Vec<Product> = products.iter().filter(|p| p.category == category).cloned().collect();
    matching.sort_by_key(|p| !p.is_popular);
    matching
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let category = RwSignal::new(ProductCategory::Hosting);
    let duration = RwSignal::new(PlanDuration::Monthly);
    let products = LocalResource::new(|| crate::net::api::fetch_products(None, true));

    view! {
        <div class="plans-page">
            <header class="page-header">
                <h1>"Plans & pricing"</h1>
                <p>"Pick the plan that fits your business. Upgrade any time."</p>
            </header>
            <BillingToggle duration=duration/>
            <nav class="category-tabs" role="tablist">
                {ProductCategory::ALL
                    .into_iter()
                    .map(|value| {
                        view! {
                            <button
                                role="tab"
                                class=move || {
                                    if category.get() == value { "category-tabs__tab is-active" } else { "category-tabs__tab" }
                                }
                                on:click=move |_| category.set(value)
                            >
                                {value.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <Suspense fallback=move || view! { <p class="plans-page__loading">"Loading plans..."</p> }>
                {move || {
                    products.get().map(|result| match result {
                        Ok(list) => {
                            let visible = products_in_category(&list, category.get());
                            if visible.is_empty() {
                                view! {
                                    <p class="plans-page__empty">"No plans in this category yet."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="plan-grid">
                                        {visible
                                            .into_iter()
                                            .map(|product| view! { <PlanCard product=product duration=duration/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                        Err(e) => view! {
                            <p class="plans-page__error">{e.user_message("Could not load plans.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
