//! Application router.
//!
//! Ledger routes are mounted under a configurable base path. Anything that
//! matches no route is answered with the dashboard snapshot. A trailing slash
//! is trimmed before routing, so `/api/clients/` reaches the clients route.

use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::normalize_path::NormalizePath;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::clients::client_routes;
use super::cycles::cycle_routes;
use super::dashboard::{dashboard_routes, get_dashboard};
use super::logs::log_routes;
use super::middleware::cors_middleware;
use super::state::AppState;

/// The routed application with path normalization in front of it.
pub type LedgerApp = NormalizePath<Router>;

/// Builds the full HTTP application.
///
/// Normalization has to wrap the router; a layer added with `Router::layer`
/// only runs once a route has been chosen.
pub fn app_router(state: AppState, base_path: &str, request_timeout: Duration) -> LedgerApp {
    let api = Router::new()
        .merge(client_routes())
        .merge(log_routes())
        .merge(cycle_routes())
        .merge(dashboard_routes());

    // axum rejects nesting at the root.
    let mounted = if base_path == "/" {
        api
    } else {
        Router::new().nest(base_path, api)
    };

    let router = mounted
        .route("/health", get(health))
        .fallback(get_dashboard)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_middleware));

    NormalizePath::trim_trailing_slash(router)
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
