//! HTTP middleware for axum.
//!
//! - `cors` - Permissive CORS headers and preflight short-circuit

pub mod cors;

pub use cors::cors_middleware;
