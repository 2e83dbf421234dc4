//! HTTP handlers for client endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::http::dto::{DeleteRequest, MessageResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::state::AppState;
use crate::application::handlers::DeleteClientCommand;
use crate::domain::foundation::present_id;
use crate::domain::Client;

use super::dto::ClientRequest;

/// GET /clients - List clients by name
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state
        .list_clients_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(clients))
}

/// POST /clients - Create a client
pub async fn create_client(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ClientRequest>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let client = state
        .create_client_handler()
        .handle(req.into_create_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /clients - Replace a client's fields
pub async fn update_client(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ClientRequest>,
) -> Result<Json<Client>, ApiError> {
    let client = state
        .update_client_handler()
        .handle(req.into_update_command())
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(client))
}

/// DELETE /clients - Delete a client with its logs and cycles
pub async fn delete_client(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_client_handler()
        .handle(DeleteClientCommand {
            id: present_id(req.id),
        })
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(MessageResponse::new(
        "Client and associated data deleted successfully",
    )))
}
