use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("All fields are required")]
    Validation,

    #[error("Email delivery failed: {0}")]
    Email(#[from] EmailError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::Validation
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Client fault; not logged as a server error
            AppError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "All fields are required" })),
            )
                .into_response(),
            AppError::Email(e) => {
                tracing::error!(error = %e, "Failed to send contact email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to send email. Please try again later.",
                        "error": e.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
