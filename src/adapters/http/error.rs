//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": ..., "details"?: ...}` with a
//! status derived from the domain error code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(serde_json::Value::String(details.into()));
        self
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InvalidBody(String),
    NotFound(String),
    MethodNotAllowed,
    /// Unexpected failure; `details` is omitted when error details are hidden.
    Internal { details: Option<String> },
    FetchFailed,
}

impl ApiError {
    /// Maps a domain error, logging anything that becomes a 500.
    pub fn from_domain(err: DomainError, expose_details: bool) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ApiError::BadRequest(err.message),
            code if code.is_not_found() => ApiError::NotFound(err.message),
            _ => {
                tracing::error!(code = %err.code, error = %err.message, "request failed");
                ApiError::Internal {
                    details: expose_details.then_some(err.message),
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal { .. } | ApiError::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => ErrorResponse::new(msg),
            ApiError::InvalidBody(reason) => {
                ErrorResponse::new("Invalid JSON body").with_details(reason)
            }
            ApiError::MethodNotAllowed => ErrorResponse::new("Method not allowed"),
            ApiError::Internal { details } => {
                let body = ErrorResponse::new("Internal server error");
                match details {
                    Some(details) => body.with_details(details),
                    None => body,
                }
            }
            ApiError::FetchFailed => ErrorResponse::new("Failed to fetch data"),
        };
        (status, Json(body)).into_response()
    }
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message_only() {
        let err = ApiError::from_domain(DomainError::validation("Client name is required"), true);
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({"error": "Client name is required"}));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let err = ApiError::from_domain(
            DomainError::new(ErrorCode::LogNotFound, "Log not found"),
            true,
        );
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Log not found");
    }

    #[tokio::test]
    async fn database_error_carries_details_when_exposed() {
        let err = ApiError::from_domain(DomainError::database("Failed to list logs", "timeout"), true);
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["details"], "Failed to list logs: timeout");
    }

    #[tokio::test]
    async fn database_error_hides_details_when_configured() {
        let err = ApiError::from_domain(DomainError::database("Failed to list logs", "timeout"), false);
        let (_, json) = body_json(err).await;
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn method_not_allowed_body() {
        let (status, json) = body_json(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json, serde_json::json!({"error": "Method not allowed"}));
    }
}
