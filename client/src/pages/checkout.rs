//! Checkout: order a plan and pay for it.
//!
//! FLOW
//! ====
//! Submit creates the order, then a payment session for it. In mock mode the
//! payment is completed directly and the customer lands on the dashboard;
//! otherwise the browser is sent to the gateway's hosted payment page.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::LoadingScreen;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{DEFAULT_CURRENCY, OrderCreate, PaymentSession, PlanDuration, Product};
use crate::state::session::Session;
use crate::state::toast::Toasts;
use crate::util::browser;
use crate::util::format::{format_price, plan_label};
use crate::util::routes::{DASHBOARD, HOME};

pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found.";
pub const ORDER_FAILED_MESSAGE: &str = "Something went wrong while placing your order.";
pub const PAYMENT_SESSION_FAILED_MESSAGE: &str = "Could not start the payment session.";

/// What to do with a freshly created payment session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentStep {
    CompleteMock { payment_id: String },
    Redirect { url: String },
    Unavailable,
}

pub fn next_payment_step(payment: &PaymentSession) -> PaymentStep {
    if payment.mock_mode {
        return PaymentStep::CompleteMock { payment_id: payment.payment_id.clone() };
    }
    match payment.payment_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => PaymentStep::Redirect { url: url.to_owned() },
        _ => PaymentStep::Unavailable,
    }
}

/// Build the order payload from the checkout form.
pub fn build_order(
    product_id: &str,
    plan_duration: PlanDuration,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<OrderCreate, &'static str> {
    let (name, email, phone) = (name.trim(), email.trim(), phone.trim());
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    Ok(OrderCreate {
        product_id: product_id.to_owned(),
        plan_duration,
        customer_name: name.to_owned(),
        customer_email: email.to_owned(),
        customer_phone: (!phone.is_empty()).then(|| phone.to_owned()),
    })
}

/// Result of the order + payment sequence, applied by the page.
enum CheckoutResult {
    Paid,
    Redirected,
    Failed(String),
}

async fn place_order(order: OrderCreate) -> CheckoutResult {
    let attempt = async {
        let created = api::create_order(&order).await?;
        let payment = api::create_payment_session(&created.order_id).await?;
        Ok::<_, ApiError>(payment)
    };
    let payment = match attempt.await {
        Ok(payment) => payment,
        Err(e) => return CheckoutResult::Failed(e.user_message(ORDER_FAILED_MESSAGE)),
    };
    match next_payment_step(&payment) {
        PaymentStep::CompleteMock { payment_id } => match api::complete_mock_payment(&payment_id).await {
            Ok(_) => CheckoutResult::Paid,
            Err(e) => CheckoutResult::Failed(e.user_message(ORDER_FAILED_MESSAGE)),
        },
        PaymentStep::Redirect { url } => {
            browser::redirect_to(&url);
            CheckoutResult::Redirected
        }
        PaymentStep::Unavailable => CheckoutResult::Failed(PAYMENT_SESSION_FAILED_MESSAGE.to_owned()),
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = Session::expect();
    let toasts = Toasts::expect();
    let navigate = use_navigate();
    let params = use_params_map();

    let product_id = Memo::new(move |_| params.with(|p| p.get("product_id").unwrap_or_default()));
    let product = LocalResource::new(move || {
        let id = product_id.get();
        async move { api::fetch_product(&id).await }
    });

    let duration = RwSignal::new(PlanDuration::Monthly);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Unknown product: notify and leave.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if let Some(Err(e)) = product.get() {
                leptos::logging::warn!("checkout product load failed: {e}");
                toasts.error(PRODUCT_NOT_FOUND_MESSAGE);
                navigate(HOME, NavigateOptions::default());
            }
        }
    });

    // Pre-fill the customer fields from the signed-in user.
    Effect::new(move || {
        if let Some(user) = session.user() {
            if name.get_untracked().is_empty() {
                name.set(user.name);
            }
            if email.get_untracked().is_empty() {
                email.set(user.email);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let order = match build_order(
            &product_id.get_untracked(),
            duration.get_untracked(),
            &name.get(),
            &email.get(),
            &phone.get(),
        ) {
            Ok(order) => order,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match place_order(order).await {
                CheckoutResult::Paid => {
                    toasts.success("Payment completed successfully.");
                    navigate(DASHBOARD, NavigateOptions::default());
                }
                CheckoutResult::Redirected => {}
                CheckoutResult::Failed(message) => {
                    toasts.error(message);
                    busy.set(false);
                }
            }
        });
    };

    let summary = move |product: Product| {
        let total = {
            let product = product.clone();
            move || format_price(product.price_for(duration.get()), DEFAULT_CURRENCY)
        };
        view! {
            <aside class="checkout-summary">
                <h2>{product.name_en.clone()}</h2>
                <p class="checkout-summary__description">{product.description_en.clone()}</p>
                <div class="checkout-summary__plans" role="radiogroup">
                    {[PlanDuration::Monthly, PlanDuration::Yearly]
                        .into_iter()
                        .map(|value| {
                            let price = format_price(product.price_for(value), DEFAULT_CURRENCY);
                            view! {
                                <label class="checkout-summary__plan">
                                    <input
                                        type="radio"
                                        name="plan_duration"
                                        prop:checked=move || duration.get() == value
                                        on:change=move |_| duration.set(value)
                                    />
                                    <span>{plan_label(value)}</span>
                                    <span>{price}</span>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="checkout-summary__total">"Total: " {total}</p>
            </aside>
        }
    };

    view! {
        <div class="checkout-page">
            <h1>"Complete your order"</h1>
            <Suspense fallback=|| view! { <LoadingScreen/> }>
                {move || {
                    product.get().and_then(Result::ok).map(|product| {
                        view! {
                            <div class="checkout-page__layout">
                                {summary(product)}
                                <form class="checkout-form" on:submit=on_submit.clone()>
                                    <label>
                                        "Full name"
                                        <input
                                            type="text"
                                            prop:value=move || name.get()
                                            on:input=move |ev| name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label>
                                        "Email"
                                        <input
                                            type="email"
                                            prop:value=move || email.get()
                                            on:input=move |ev| email.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label>
                                        "Phone (optional)"
                                        <input
                                            type="tel"
                                            prop:value=move || phone.get()
                                            on:input=move |ev| phone.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                        {move || if busy.get() { "Processing..." } else { "Pay now" }}
                                    </button>
                                    <Show when=move || !info.get().is_empty()>
                                        <p class="checkout-form__message">{move || info.get()}</p>
                                    </Show>
                                </form>
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
