//! Customer dashboard: order history and invoices with PDF download.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Invoice, Order, OrderStatus, PaymentStatus};
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::browser;
use crate::util::format::{
    format_price, invoice_filename, order_status_label, payment_status_label, plan_label, short_date,
};
use crate::util::routes::PLANS;

pub fn order_status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--pending",
        OrderStatus::Processing => "badge badge--info",
        OrderStatus::Completed => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--muted",
    }
}

pub fn payment_status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "badge badge--pending",
        PaymentStatus::Paid => "badge badge--success",
        PaymentStatus::Failed => "badge badge--danger",
        PaymentStatus::Refunded => "badge badge--muted",
    }
}

/// Newest first. Timestamps are ISO-8601, so string order is time order.
pub fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> &str) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(created_at(a)));
    items
}

/// Fetch an invoice PDF and hand it to the browser as a download.
pub(crate) async fn download_invoice(invoice_id: String, toasts: Toasts) {
    let bytes = match api::fetch_invoice_pdf(&invoice_id).await {
        Ok(bytes) => bytes,
        Err(e) => {
            leptos::logging::warn!("invoice {invoice_id} download failed: {e}");
            toasts.error(e.user_message("Could not download the invoice."));
            return;
        }
    };
    match browser::download_bytes(&bytes, &invoice_filename(&invoice_id), "application/pdf") {
        Ok(()) => toasts.success("Invoice downloaded."),
        Err(e) => {
            leptos::logging::warn!("invoice {invoice_id} save failed: {e}");
            toasts.error("Could not download the invoice.");
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = Session::expect();
    let orders = LocalResource::new(|| api::fetch_my_orders());
    let invoices = LocalResource::new(|| api::fetch_my_invoices());

    let greeting = move || session.user().map(|u| format!("Welcome, {}", u.name)).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <a href=PLANS class="btn btn--primary">"Order a new plan"</a>
            </header>

            <section class="dashboard-page__section">
                <h2>"My orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders.get().map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <p class="dashboard-page__empty">"You have no orders yet."</p>
                            }
                                .into_any(),
                            Ok(list) => view! { <OrderTable orders=newest_first(list, |o| o.created_at.as_str())/> }
                                .into_any(),
                            Err(e) => view! {
                                <p class="dashboard-page__error">{e.user_message("Could not load orders.")}</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__section">
                <h2>"My invoices"</h2>
                <Suspense fallback=move || view! { <p>"Loading invoices..."</p> }>
                    {move || {
                        invoices.get().map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <p class="dashboard-page__empty">"No invoices yet."</p>
                            }
                                .into_any(),
                            Ok(list) => view! { <InvoiceTable invoices=newest_first(list, |i| i.created_at.as_str())/> }
                                .into_any(),
                            Err(e) => view! {
                                <p class="dashboard-page__error">{e.user_message("Could not load invoices.")}</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn OrderTable(orders: Vec<Order>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Plan"</th>
                    <th>"Billing"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Payment"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {orders
                    .into_iter()
                    .map(|order| {
                        view! {
                            <tr>
                                <td class="data-table__mono">{order.order_id.clone()}</td>
                                <td>{order.product_name.clone()}</td>
                                <td>{plan_label(order.plan_duration)}</td>
                                <td>{format_price(order.amount, &order.currency)}</td>
                                <td>
                                    <span class=order_status_class(order.status)>
                                        {order_status_label(order.status)}
                                    </span>
                                </td>
                                <td>
                                    <span class=payment_status_class(order.payment_status)>
                                        {payment_status_label(order.payment_status)}
                                    </span>
                                </td>
                                <td>{short_date(&order.created_at).to_owned()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Invoice list with a download action per row. Also used by the admin view.
#[component]
pub fn InvoiceTable(invoices: Vec<Invoice>, #[prop(optional)] show_customer: bool) -> impl IntoView {
    let toasts = Toasts::expect();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Invoice"</th>
                    <Show when=move || show_customer>
                        <th>"Customer"</th>
                    </Show>
                    <th>"Plan"</th>
                    <th>"Total"</th>
                    <th>"Status"</th>
                    <th>"Date"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {invoices
                    .into_iter()
                    .map(|invoice| {
                        let invoice_id = invoice.invoice_id.clone();
                        let customer = format!("{} <{}>", invoice.customer_name, invoice.customer_email);
                        view! {
                            <tr>
                                <td class="data-table__mono">{invoice.invoice_number.clone()}</td>
                                <Show when=move || show_customer>
                                    <td>{customer.clone()}</td>
                                </Show>
                                <td>{format!("{} ({})", invoice.product_name, plan_label(invoice.plan_duration))}</td>
                                <td>{format_price(invoice.total, &invoice.currency)}</td>
                                <td>
                                    <span class=payment_status_class(invoice.status)>
                                        {payment_status_label(invoice.status)}
                                    </span>
                                </td>
                                <td>{short_date(&invoice.created_at).to_owned()}</td>
                                <td>
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| {
                                            leptos::task::spawn_local(download_invoice(invoice_id.clone(), toasts));
                                        }
                                    >
                                        "Download PDF"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
