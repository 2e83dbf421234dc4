//! HTTP routes for client endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_client, delete_client, list_clients, update_client};
use crate::adapters::http::error::method_not_allowed;
use crate::adapters::http::state::AppState;

/// Creates the client router.
pub fn client_routes() -> Router<AppState> {
    Router::new().route(
        "/clients",
        get(list_clients)
            .post(create_client)
            .put(update_client)
            .delete(delete_client)
            .fallback(method_not_allowed),
    )
}
