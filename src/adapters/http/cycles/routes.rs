//! HTTP routes for cycle endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_cycle, delete_cycle, list_cycles, update_cycle};
use crate::adapters::http::error::method_not_allowed;
use crate::adapters::http::state::AppState;

/// Creates the cycle router.
pub fn cycle_routes() -> Router<AppState> {
    Router::new().route(
        "/cycles",
        get(list_cycles)
            .post(create_cycle)
            .put(update_cycle)
            .delete(delete_cycle)
            .fallback(method_not_allowed),
    )
}
