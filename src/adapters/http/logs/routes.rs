//! HTTP routes for log endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_log, delete_log, list_logs, update_log};
use crate::adapters::http::error::method_not_allowed;
use crate::adapters::http::state::AppState;

/// Creates the log router.
pub fn log_routes() -> Router<AppState> {
    Router::new().route(
        "/logs",
        get(list_logs)
            .post(create_log)
            .put(update_log)
            .delete(delete_log)
            .fallback(method_not_allowed),
    )
}
