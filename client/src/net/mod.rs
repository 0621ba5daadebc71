//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `backend` exposes the credential subset behind a
//! mockable trait, `error` defines the shared failure type, and `types` the
//! wire schema.

pub mod api;
pub mod backend;
pub mod error;
pub mod types;
