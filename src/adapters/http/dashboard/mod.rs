//! Dashboard HTTP adapter module.
//!
//! Serves the combined snapshot at `/all` and for any unmatched path.

pub mod handlers;
pub mod routes;

pub use handlers::get_dashboard;
pub use routes::dashboard_routes;
