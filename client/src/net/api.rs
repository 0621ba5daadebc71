//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! `credentials: include` so the backend session cookie rides along.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-2xx responses carry the
//! backend `detail` message so callers can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminStats, AuthResponse, ContactMessage, ContactMessageCreate, Invoice, Order, OrderCreate, OrderStatus,
    PaymentCompletion, PaymentSession, Product, ProductCategory, ProductUpdate, User,
};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest, SessionExchangeRequest, SessionExchangeResponse};

/// Mount point of the backend API on the host origin.
pub const API_PREFIX: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(category: Option<ProductCategory>, active_only: bool) -> String {
    let mut url = format!("{API_PREFIX}/products?active_only={active_only}");
    if let Some(category) = category {
        url.push_str("&category=");
        url.push_str(category.as_str());
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(product_id: &str) -> String {
    format!("{API_PREFIX}/products/{}", urlencoding::encode(product_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn payment_session_endpoint(order_id: &str) -> String {
    format!("{API_PREFIX}/payments/create-session?order_id={}", urlencoding::encode(order_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn mock_complete_endpoint(payment_id: &str) -> String {
    format!("{API_PREFIX}/payments/mock-complete/{}", urlencoding::encode(payment_id))
}

/// Path of the PDF rendition of an invoice.
pub fn invoice_pdf_endpoint(invoice_id: &str) -> String {
    format!("{API_PREFIX}/invoices/{}/pdf", urlencoding::encode(invoice_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn order_status_endpoint(order_id: &str, status: OrderStatus) -> String {
    format!(
        "{API_PREFIX}/admin/orders/{}/status?status={}",
        urlencoding::encode(order_id),
        status.as_str()
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn message_read_endpoint(message_id: &str) -> String {
    format!("{API_PREFIX}/admin/contact/{}/read", urlencoding::encode(message_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_product_endpoint(product_id: &str) -> String {
    format!("{API_PREFIX}/admin/products/{}", urlencoding::encode(product_id))
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::ApiError;

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn put(url: &str) -> RequestBuilder {
        Request::put(url).credentials(RequestCredentials::Include)
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    pub(super) async fn send_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Network(format!("request encode failed: {e}")))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

// =============================================================
// Auth
// =============================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns `Status { status: 401, .. }` when no session cookie is present.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/auth/me"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend rejection (usually 401 "Invalid credentials").
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email, password };
        let resp = transport::send_json(transport::post(&endpoint("/auth/login")), &body).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend rejection (e.g. 400 "Email already registered").
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest { name, email, password };
        let resp = transport::send_json(transport::post(&endpoint("/auth/register")), &body).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the backend session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request does not complete with a 2xx status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(transport::post(&endpoint("/auth/logout"))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Trade a one-time SSO session identifier for a backend session via
/// `POST /api/auth/session`.
///
/// # Errors
///
/// Returns 401 when the identity provider rejects the identifier.
pub async fn exchange_session(session_id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = SessionExchangeRequest { session_id };
        let resp = transport::send_json(transport::post(&endpoint("/auth/session")), &body).await?;
        let body: SessionExchangeResponse = transport::decode(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Catalog
// =============================================================

/// List products, optionally narrowed to one category.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_products(category: Option<ProductCategory>, active_only: bool) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&products_endpoint(category, active_only))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (category, active_only);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single product.
///
/// # Errors
///
/// Returns 404 when the product does not exist.
pub async fn fetch_product(product_id: &str) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&product_endpoint(product_id))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Orders, payments, invoices
// =============================================================

/// Place an order for the signed-in user.
///
/// # Errors
///
/// Returns an error if the backend rejects the order.
pub async fn create_order(order: &OrderCreate) -> Result<Order, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(transport::post(&endpoint("/orders")), order).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order;
        Err(ApiError::Unavailable)
    }
}

/// List the signed-in user's orders, newest first.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/orders"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Open a payment session for an unpaid order.
///
/// # Errors
///
/// Returns 400 when the order is already paid.
pub async fn create_payment_session(order_id: &str) -> Result<PaymentSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::post(&payment_session_endpoint(order_id))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order_id;
        Err(ApiError::Unavailable)
    }
}

/// Complete a payment directly when the gateway runs in mock mode.
///
/// # Errors
///
/// Returns 404 when the payment or its order is unknown.
pub async fn complete_mock_payment(payment_id: &str) -> Result<PaymentCompletion, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::post(&mock_complete_endpoint(payment_id))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payment_id;
        Err(ApiError::Unavailable)
    }
}

/// List the signed-in user's invoices.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_my_invoices() -> Result<Vec<Invoice>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/invoices"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Download the PDF bytes of an invoice.
///
/// # Errors
///
/// Returns 404 when the invoice is not visible to the caller.
pub async fn fetch_invoice_pdf(invoice_id: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&invoice_pdf_endpoint(invoice_id))).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = invoice_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Contact
// =============================================================

/// Submit the public contact form.
///
/// # Errors
///
/// Returns an error if the backend rejects the message.
pub async fn submit_contact_message(message: &ContactMessageCreate) -> Result<ContactMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(transport::post(&endpoint("/contact")), message).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Admin
// =============================================================

/// Fetch aggregate counters for the admin overview.
///
/// # Errors
///
/// Returns 403 for non-admin sessions.
pub async fn fetch_admin_stats() -> Result<AdminStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/admin/stats"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List every product including inactive ones.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_admin_products() -> Result<Vec<Product>, ApiError> {
    fetch_products(None, false).await
}

/// Apply a partial update to a product.
///
/// # Errors
///
/// Returns 400 when the update is empty and 404 for unknown products.
pub async fn update_product(product_id: &str, update: &ProductUpdate) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send_json(transport::put(&admin_product_endpoint(product_id)), update).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, update);
        Err(ApiError::Unavailable)
    }
}

/// List all orders across customers.
///
/// # Errors
///
/// Returns 403 for non-admin sessions.
pub async fn fetch_admin_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/admin/orders"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Move an order to a new fulfilment status.
///
/// # Errors
///
/// Returns 404 when the order does not exist.
pub async fn update_order_status(order_id: &str, status: OrderStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(transport::put(&order_status_endpoint(order_id, status))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (order_id, status);
        Err(ApiError::Unavailable)
    }
}

/// List all invoices across customers.
///
/// # Errors
///
/// Returns 403 for non-admin sessions.
pub async fn fetch_admin_invoices() -> Result<Vec<Invoice>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/admin/invoices"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List contact-form submissions.
///
/// # Errors
///
/// Returns 403 for non-admin sessions.
pub async fn fetch_admin_messages() -> Result<Vec<ContactMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::send(transport::get(&endpoint("/admin/contact"))).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Flag a contact message as read.
///
/// # Errors
///
/// Returns 404 when the message does not exist.
pub async fn mark_message_read(message_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send(transport::put(&message_read_endpoint(message_id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message_id;
        Err(ApiError::Unavailable)
    }
}
