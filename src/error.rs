use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Text required")]
    MissingText,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Upstream TTS call failed: {0}")]
    Upstream(String),

    #[error("Provider returned no audio")]
    NoAudio,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream causes are logged but never leaked to the client.
        let (status, message) = match &self {
            AppError::MissingText => (StatusCode::BAD_REQUEST, "Text required".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Upstream(cause) => {
                tracing::error!("TTS provider call failed: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "TTS failed".to_string())
            }
            AppError::NoAudio => {
                tracing::error!("TTS provider returned an empty audio payload");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "No audio generated".to_string(),
                )
            }
            AppError::Internal(cause) => {
                tracing::error!("Internal error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::warn!("Request rejected: {} - {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
