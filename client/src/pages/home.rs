//! Landing page: hero, featured hosting plans and service highlights.

use leptos::prelude::*;

use crate::components::plan_card::{BillingToggle, PlanCard};
use crate::net::types::{PlanDuration, ProductCategory};
use crate::util::routes::{CONTACT, PLANS};

/// Hosting plans shown on the landing page.
const FEATURED_PLAN_LIMIT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let duration = RwSignal::new(PlanDuration::Monthly);
    let products = LocalResource::new(|| crate::net::api::fetch_products(Some(ProductCategory::Hosting), true));

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Fast, reliable hosting for your business"</h1>
                <p>"Hosting, domains and digital marketing from one team, billed in EGP."</p>
                <div class="hero__actions">
                    <a href=PLANS class="btn btn--primary">"Browse plans"</a>
                    <a href=CONTACT class="btn btn--outline">"Talk to us"</a>
                </div>
            </section>

            <section class="home-page__plans">
                <h2>"Hosting plans"</h2>
                <BillingToggle duration=duration/>
                <Suspense fallback=move || view! { <p>"Loading plans..."</p> }>
                    {move || {
                        products.get().map(|result| match result {
                            Ok(list) => view! {
                                <div class="plan-grid">
                                    {list
                                        .into_iter()
                                        .take(FEATURED_PLAN_LIMIT)
                                        .map(|product| view! { <PlanCard product=product duration=duration/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            Err(e) => view! {
                                <p class="home-page__error">{e.user_message("Could not load plans.")}</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="home-page__services">
                <article>
                    <h3>"Web hosting"</h3>
                    <p>"SSD storage, free SSL and daily backups on every plan."</p>
                </article>
                <article>
                    <h3>"Domains"</h3>
                    <p>"Register and renew .com, .net and .eg domains."</p>
                </article>
                <article>
                    <h3>"Marketing"</h3>
                    <p>"Social media and search campaigns run by specialists."</p>
                </article>
            </section>
        </div>
    }
}
