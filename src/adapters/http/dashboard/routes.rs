//! HTTP routes for the dashboard snapshot.

use axum::routing::get;
use axum::Router;

use super::handlers::get_dashboard;
use crate::adapters::http::error::method_not_allowed;
use crate::adapters::http::state::AppState;

/// Creates the dashboard router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/all", get(get_dashboard).fallback(method_not_allowed))
}
