use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use validator::Validate;

use crate::contact::{self, ContactSubmission};
use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact - relay a contact form submission as an email
///
/// Validate, compose, deliver, report. No retries and no persistence;
/// resubmitting an identical payload sends a second email.
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let submission = submission.trimmed();
    submission.validate()?;

    tracing::info!(name = %submission.name, "Relaying contact form submission");

    let email = contact::compose(&submission)?;
    state.email_service.send(&email).await?;

    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: "Email sent successfully!".to_string(),
        }),
    ))
}
