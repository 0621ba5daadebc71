//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, notifications, loading states)
//! and the route guard, reading shared state from Leptos context providers.

pub mod loading;
pub mod navbar;
pub mod plan_card;
pub mod route_guard;
pub mod sso_button;
pub mod toaster;
