//! Admin invoice list.

use leptos::prelude::*;

use crate::net::api;
use crate::pages::dashboard::{InvoiceTable, newest_first};

#[component]
pub fn AdminInvoicesPage() -> impl IntoView {
    let invoices = LocalResource::new(|| api::fetch_admin_invoices());

    view! {
        <div class="admin-page">
            <h1>"Invoices"</h1>
            <Suspense fallback=move || view! { <p>"Loading invoices..."</p> }>
                {move || {
                    invoices.get().map(|result| match result {
                        Ok(list) if list.is_empty() => view! { <p>"No invoices yet."</p> }.into_any(),
                        Ok(list) => view! {
                            <InvoiceTable invoices=newest_first(list, |i| i.created_at.as_str()) show_customer=true/>
                        }
                            .into_any(),
                        Err(e) => view! {
                            <p class="admin-page__error">{e.user_message("Could not load invoices.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
