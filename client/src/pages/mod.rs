//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, the
//! navigation that follows an action) and delegates shared chrome to
//! `components`.

pub mod about;
pub mod admin;
pub mod checkout;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod plans;
pub mod register;
pub mod sso_callback;
