use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use marketside_contact::Submission;
use serde::Serialize;

use crate::{error::ApiError, routes::AppState};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully";

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact
pub async fn submit(
    State(app_state): State<AppState>,
    body: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(submission) = body.map_err(|err| {
        tracing::debug!(err = %err, "Unreadable contact request body");
        ApiError::BadRequest("Invalid request body".to_owned())
    })?;

    app_state.contact_command.submit(submission).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: SUCCESS_MESSAGE,
    }))
}
