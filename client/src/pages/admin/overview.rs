//! Admin statistics overview.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AdminStats, DEFAULT_CURRENCY};
use crate::util::format::format_price;

/// `(label, value)` tiles in display order.
pub fn stat_tiles(stats: &AdminStats) -> Vec<(&'static str, String)> {
    vec![
        ("Total revenue", format_price(stats.total_revenue, DEFAULT_CURRENCY)),
        ("Total orders", stats.total_orders.to_string()),
        ("Paid orders", stats.paid_orders.to_string()),
        ("Pending orders", stats.pending_orders.to_string()),
        ("Products", stats.total_products.to_string()),
        ("Users", stats.total_users.to_string()),
        ("Unread messages", stats.unread_messages.to_string()),
    ]
}

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let stats = LocalResource::new(|| api::fetch_admin_stats());

    view! {
        <div class="admin-page">
            <h1>"Overview"</h1>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats.get().map(|result| match result {
                        Ok(stats) => view! {
                            <div class="stat-grid">
                                {stat_tiles(&stats)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="stat-tile">
                                                <span class="stat-tile__label">{label}</span>
                                                <span class="stat-tile__value">{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any(),
                        Err(e) => view! {
                            <p class="admin-page__error">{e.user_message("Could not load statistics.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
