//! Route paths and their access classes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts views at these paths and wraps non-public ones in
//! `RouteGuard`. Classification is a pure function of the path so redirects
//! can be reasoned about without rendering.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";
pub const PLANS: &str = "/plans";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const ADMIN: &str = "/admin";
pub const ADMIN_PRODUCTS: &str = "/admin/products";
pub const ADMIN_ORDERS: &str = "/admin/orders";
pub const ADMIN_INVOICES: &str = "/admin/invoices";
pub const ADMIN_MESSAGES: &str = "/admin/messages";

/// Where authenticated users land by default and after a forbidden redirect.
pub const DEFAULT_LANDING: &str = DASHBOARD;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users with the admin role.
    Admin,
}

/// Classify a request path (query and fragment are ignored).
pub fn access_for(path: &str) -> Access {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

    if is_under(path, ADMIN) {
        Access::Admin
    } else if is_under(path, DASHBOARD) || path.starts_with("/checkout/") {
        Access::Authenticated
    } else {
        Access::Public
    }
}

pub fn checkout_path(product_id: &str) -> String {
    format!("/checkout/{}", urlencoding::encode(product_id))
}

fn is_under(path: &str, root: &str) -> bool {
    path == root || path.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
}
