//! Admin back-office views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view here renders inside `AdminLayout`, which the app router mounts
//! behind an admin-only `RouteGuard`. The views only list and toggle backend
//! records; creating or editing catalog entries is out of scope for this
//! frontend.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

mod invoices;
mod messages;
mod orders;
mod overview;
mod products;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::util::routes::{ADMIN, ADMIN_INVOICES, ADMIN_MESSAGES, ADMIN_ORDERS, ADMIN_PRODUCTS};

pub use invoices::AdminInvoicesPage;
pub use messages::AdminMessagesPage;
pub use orders::AdminOrdersPage;
pub use overview::AdminOverviewPage;
pub use products::AdminProductsPage;

/// Sidebar entries: `(path, label, exact match)`.
const ADMIN_NAV: [(&str, &str, bool); 5] = [
    (ADMIN, "Overview", true),
    (ADMIN_PRODUCTS, "Products", false),
    (ADMIN_ORDERS, "Orders", false),
    (ADMIN_INVOICES, "Invoices", false),
    (ADMIN_MESSAGES, "Messages", false),
];

/// Whether a sidebar entry for `path` is the current section.
pub fn is_nav_active(current: &str, path: &str, exact: bool) -> bool {
    let current = current.trim_end_matches('/');
    let current = if current.is_empty() { "/" } else { current };
    if exact {
        return current == path;
    }
    current == path || current.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <a href=ADMIN class="admin-layout__brand">"Igate Admin"</a>
                <nav>
                    {ADMIN_NAV
                        .into_iter()
                        .map(|(path, label, exact)| {
                            view! {
                                <a
                                    href=path
                                    class=move || {
                                        if location.pathname.with(|current| is_nav_active(current, path, exact)) {
                                            "admin-layout__link is-active"
                                        } else {
                                            "admin-layout__link"
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <section class="admin-layout__content">
                <Outlet/>
            </section>
        </div>
    }
}
