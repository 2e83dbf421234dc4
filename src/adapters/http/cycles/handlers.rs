//! HTTP handlers for cycle endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::http::dto::{DeleteRequest, MessageResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::state::AppState;
use crate::application::handlers::DeleteCycleCommand;
use crate::domain::foundation::present_id;
use crate::domain::{Cycle, CycleWithClient};

use super::dto::CycleRequest;

/// GET /cycles - List cycles with client names, newest first
pub async fn list_cycles(
    State(state): State<AppState>,
) -> Result<Json<Vec<CycleWithClient>>, ApiError> {
    let cycles = state
        .list_cycles_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(cycles))
}

/// POST /cycles - Create a cycle and mark its logs paid
pub async fn create_cycle(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CycleRequest>,
) -> Result<(StatusCode, Json<Cycle>), ApiError> {
    let cycle = state
        .create_cycle_handler()
        .handle(req.into_create_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(cycle)))
}

/// PUT /cycles - Replace a cycle's fields (paid flags untouched)
pub async fn update_cycle(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CycleRequest>,
) -> Result<Json<Cycle>, ApiError> {
    let cycle = state
        .update_cycle_handler()
        .handle(req.into_update_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(cycle))
}

/// DELETE /cycles - Delete a cycle and mark its logs unpaid
pub async fn delete_cycle(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_cycle_handler()
        .handle(DeleteCycleCommand {
            id: present_id(req.id),
        })
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(MessageResponse::new("Cycle deleted successfully")))
}
