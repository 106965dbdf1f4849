use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Application-wide error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    ValidationError(String),
    /// Upstream model call failed: transport error, non-success provider
    /// status, or a payload with nothing usable in it.
    GenerationFailed(String),
}

impl AppError {
    /// Client-facing error message.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::GenerationFailed(_) => {
                "Failed to generate destination information".to_string()
            }
        }
    }

    /// Underlying cause, exposed in the `details` field when present.
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::GenerationFailed(cause) => Some(cause.clone()),
            _ => None,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Failed to generate destination information")]
    pub error: String,
    /// Underlying cause, omitted when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        let details = self.details();

        match &self {
            AppError::GenerationFailed(cause) => {
                error!("Generation failed: {}", cause);
            }
            _ => {
                error!("Request failed [{}]: {}", status, message);
            }
        }

        let body = ErrorResponse {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
