//! Wire DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads field-for-field (snake_case)
//! so serde round-trips stay lossless. Enumerations that the backend may
//! extend fall back to a conservative variant instead of failing the whole
//! response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Identity
// =============================================================

/// Authorization level attached to a user record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl<'de> Deserialize<'de> for Role {
    /// Unknown role strings map to `Customer` so an unexpected value never
    /// grants elevated access.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw.eq_ignore_ascii_case("admin") { Self::Admin } else { Self::Customer })
    }
}

/// An authenticated user as returned by `/api/auth/me` and the login routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (e.g. `user_3f9a...`).
    pub user_id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub role: Role,
    /// Avatar URL supplied by the identity provider, if any.
    #[serde(default)]
    pub picture: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Reply body of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token echoed by the backend. The session cookie is authoritative.
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

/// Reply body of `POST /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionExchangeResponse {
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionExchangeRequest<'a> {
    pub session_id: &'a str,
}

// =============================================================
// Catalog
// =============================================================

/// Product line a plan belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Hosting,
    Domains,
    Marketing,
}

impl ProductCategory {
    pub const ALL: [Self; 3] = [Self::Hosting, Self::Domains, Self::Marketing];

    /// Query-string value expected by `GET /api/products?category=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hosting => "hosting",
            Self::Domains => "domains",
            Self::Marketing => "marketing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hosting => "Hosting",
            Self::Domains => "Domains",
            Self::Marketing => "Marketing",
        }
    }
}

/// A purchasable subscription plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name_ar: String,
    pub name_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
    pub category: ProductCategory,
    pub price_monthly: f64,
    pub price_yearly: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl Product {
    /// Price charged for the given billing period.
    pub fn price_for(&self, duration: PlanDuration) -> f64 {
        match duration {
            PlanDuration::Monthly => self.price_monthly,
            PlanDuration::Yearly => self.price_yearly,
        }
    }
}

/// Partial product update; only the populated fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

// =============================================================
// Orders, payments, invoices
// =============================================================

/// Billing period chosen at checkout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    #[default]
    Monthly,
    Yearly,
}

impl PlanDuration {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Processing, Self::Completed, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Checkout submission for `POST /api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderCreate {
    pub product_id: String,
    pub plan_duration: PlanDuration,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub plan_duration: PlanDuration,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: String,
}

/// Reply of `POST /api/payments/create-session`.
///
/// In mock mode the gateway is not configured and the payment is completed
/// through `mock-complete`; otherwise `payment_url` points at the hosted
/// payment page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentSession {
    pub payment_id: String,
    pub order_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub mock_mode: bool,
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `POST /api/payments/mock-complete/{payment_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentCompletion {
    pub message: String,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub invoice_number: String,
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub plan_duration: PlanDuration,
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    pub total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub created_at: String,
}

// =============================================================
// Contact + admin
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub message_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregate counters for the admin overview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_orders: u64,
    pub paid_orders: u64,
    pub pending_orders: u64,
    pub total_products: u64,
    pub total_users: u64,
    pub unread_messages: u64,
    pub total_revenue: f64,
}

fn default_true() -> bool {
    true
}

/// Currency the catalog is priced in.
pub const DEFAULT_CURRENCY: &str = "EGP";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}
