use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Standard error response body returned for all failed requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Validation(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
            ProductError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError"),
        };

        // Client-caused outcomes are expected; only backend faults are errors.
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::info!("{}", self);
        }

        let body = ErrorResponse::new(error, self.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Storage(err.to_string())
    }
}
