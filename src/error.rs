use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Errors of the JSON API, mapped onto `{ "error": ... }` bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
}

impl From<marketside_shared::Error> for ApiError {
    fn from(value: marketside_shared::Error) -> Self {
        match value {
            marketside_shared::Error::Validate(err) => ApiError::Validation {
                message: err.message,
                fields: err.fields,
            },
            marketside_shared::Error::Delivery(err) => ApiError::Delivery(err),
            marketside_shared::Error::Server(err) => ApiError::Internal(err),
            marketside_shared::Error::Unknown(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, fields) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Validation { message, fields } => (StatusCode::BAD_REQUEST, message, fields),
            ApiError::Delivery(e) => {
                tracing::error!("Delivery provider error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                    Vec::new(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, fields })).into_response()
    }
}
