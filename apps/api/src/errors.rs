use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`; malformed model output
/// additionally carries the raw text under `"raw"`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("OpenAI request timed out.")]
    Timeout,

    #[error("OpenAI request failed.")]
    UpstreamUnavailable,

    #[error("OpenAI error: {body}")]
    UpstreamRejected { status: u16, body: String },

    #[error("{message}")]
    MalformedOutput { message: String, raw: String },

    #[error("{0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) if e.is_timeout() => AppError::Timeout,
            LlmError::Http(_) => AppError::UpstreamUnavailable,
            LlmError::Api { status, body } => AppError::UpstreamRejected { status, body },
            LlmError::Decode { source, body } => AppError::MalformedOutput {
                message: format!("OpenAI returned an unreadable response: {source}"),
                raw: body,
            },
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout | AppError::UpstreamUnavailable => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::MalformedOutput { .. } => StatusCode::BAD_GATEWAY,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation(msg) => json!({ "error": msg }),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                json!({ "error": msg })
            }
            AppError::Timeout | AppError::UpstreamUnavailable => {
                tracing::warn!("Upstream call did not complete: {self}");
                json!({ "error": self.to_string() })
            }
            AppError::UpstreamRejected { status, .. } => {
                tracing::warn!("OpenAI rejected the request with status {status}");
                json!({ "error": self.to_string() })
            }
            AppError::MalformedOutput { message, raw } => {
                tracing::warn!("Malformed model output ({} bytes): {message}", raw.len());
                json!({ "error": message, "raw": raw })
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                json!({ "error": msg })
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({ "error": "An internal server error occurred" })
            }
        };

        (status, Json(body)).into_response()
    }
}
