//! Collaborator clients used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one external service boundary: the trait the routes
//! depend on plus the single reqwest-backed implementation. Route handlers
//! stay focused on envelope translation and status mapping.

pub mod pricing;
pub mod session;
pub mod settings;
