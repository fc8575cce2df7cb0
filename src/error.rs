//! Error types shared by the HTTP handlers

use crate::notify::NotifyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Presence and sign checks applied before data reaches the registry or a sender
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("price must be a non-negative number")]
    InvalidPrice,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Notify(NotifyError::NotConfigured { .. }) => {
                (StatusCode::SERVICE_UNAVAILABLE, "not_configured")
            }
            ApiError::Notify(NotifyError::Rejected { .. }) => {
                (StatusCode::BAD_GATEWAY, "remote_rejected")
            }
            ApiError::Notify(NotifyError::Transport { .. }) => {
                (StatusCode::BAD_GATEWAY, "transport_error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        json_error(status, code, self.to_string())
    }
}

/// Renders `{"error": code, "message": message}` with the given status
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
