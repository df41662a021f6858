//! Axum route handler for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::TailoredResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub resume: TailoredResume,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-resume
///
/// Tailors the configured resume to the posted job description.
/// A body that is not a JSON object, or a non-string `jobDescription`, is
/// treated as a missing job description.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = body
        .and_then(|Json(value)| serde_json::from_value::<GenerateRequest>(value).ok())
        .unwrap_or_default();

    let span = tracing::info_span!("generate", request_id = %Uuid::new_v4());
    let resume = state
        .generator
        .generate(request.job_description.as_deref())
        .instrument(span)
        .await?;

    Ok(Json(GenerateResponse { resume }))
}
