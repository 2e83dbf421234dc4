//! HTTP handlers for log endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::http::dto::{DeleteRequest, MessageResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::state::AppState;
use crate::application::handlers::DeleteLogCommand;
use crate::domain::foundation::present_id;
use crate::domain::{LogWithClient, WorkLog};

use super::dto::LogRequest;

/// GET /logs - List logs with client names, newest first
pub async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<LogWithClient>>, ApiError> {
    let logs = state
        .list_logs_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(logs))
}

/// POST /logs - Record a log
pub async fn create_log(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LogRequest>,
) -> Result<(StatusCode, Json<WorkLog>), ApiError> {
    let log = state
        .create_log_handler()
        .handle(req.into_create_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// PUT /logs - Replace a log's fields
pub async fn update_log(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LogRequest>,
) -> Result<Json<WorkLog>, ApiError> {
    let log = state
        .update_log_handler()
        .handle(req.into_update_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(log))
}

/// DELETE /logs
pub async fn delete_log(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_log_handler()
        .handle(DeleteLogCommand {
            id: present_id(req.id),
        })
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(MessageResponse::new("Log deleted successfully")))
}
