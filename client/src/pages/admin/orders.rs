//! Admin order list with status changes.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::OrderStatus;
use crate::pages::dashboard::{newest_first, payment_status_class};
use crate::state::toast::Toasts;
use crate::util::format::{format_price, order_status_label, payment_status_label, plan_label, short_date};

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let toasts = Toasts::expect();
    let orders = LocalResource::new(|| api::fetch_admin_orders());

    let change_status = move |order_id: String, raw: String| {
        let Some(status) = OrderStatus::parse(&raw) else {
            leptos::logging::warn!("ignoring unknown order status {raw:?}");
            return;
        };
        leptos::task::spawn_local(async move {
            match api::update_order_status(&order_id, status).await {
                Ok(()) => {
                    toasts.success("Order status updated.");
                    orders.refetch();
                }
                Err(e) => toasts.error(e.user_message("Could not update the order status.")),
            }
        });
    };

    view! {
        <div class="admin-page">
            <h1>"Orders"</h1>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders.get().map(|result| match result {
                        Ok(list) => view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Customer"</th>
                                        <th>"Plan"</th>
                                        <th>"Amount"</th>
                                        <th>"Payment"</th>
                                        <th>"Status"</th>
                                        <th>"Date"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {newest_first(list, |o| o.created_at.as_str())
                                        .into_iter()
                                        .map(|order| {
                                            let order_id = order.order_id.clone();
                                            let current = order.status;
                                            view! {
                                                <tr>
                                                    <td class="data-table__mono">{order.order_id.clone()}</td>
                                                    <td>
                                                        {order.customer_name.clone()}
                                                        <br/>
                                                        <small>{order.customer_email.clone()}</small>
                                                    </td>
                                                    <td>
                                                        {format!("{} ({})", order.product_name, plan_label(order.plan_duration))}
                                                    </td>
                                                    <td>{format_price(order.amount, &order.currency)}</td>
                                                    <td>
                                                        <span class=payment_status_class(order.payment_status)>
                                                            {payment_status_label(order.payment_status)}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <select on:change=move |ev| {
                                                            change_status(order_id.clone(), event_target_value(&ev));
                                                        }>
                                                            {OrderStatus::ALL
                                                                .into_iter()
                                                                .map(|status| {
                                                                    view! {
                                                                        <option value=status.as_str() selected={status == current}>
                                                                            {order_status_label(status)}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </select>
                                                    </td>
                                                    <td>{short_date(&order.created_at).to_owned()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any(),
                        Err(e) => view! {
                            <p class="admin-page__error">{e.user_message("Could not load orders.")}</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
