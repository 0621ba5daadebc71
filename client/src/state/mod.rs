//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`) so components depend on
//! small focused models provided through context by `App`.

pub mod session;
pub mod toast;
