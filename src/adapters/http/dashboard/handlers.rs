//! HTTP handlers for the dashboard snapshot.

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::DashboardSnapshot;

/// GET /all - Clients, logs, and cycles in one response
///
/// Also used as the router fallback, so it answers any method.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let snapshot = state
        .dashboard_handler()
        .handle()
        .await
        .map_err(|_| ApiError::FetchFailed)?;
    Ok(Json(snapshot))
}
