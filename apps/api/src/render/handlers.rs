//! Axum route handler for the Render API.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::TailoredResume;
use crate::render::render_resume;

/// Suggested filename for the downloaded document.
pub const DOWNLOAD_FILENAME: &str = "tailored-resume.html";

/// POST /api/render-resume
///
/// Renders `{ "resume": TailoredResume }` as a downloadable HTML document.
/// A missing or null `resume` is a 400. A `resume` missing a required field
/// fails at render time and is a 500 carrying the underlying message; extra
/// properties are ignored.
pub async fn handle_render(body: Option<Json<Value>>) -> Result<Response, AppError> {
    let resume = body
        .and_then(|Json(mut value)| value.get_mut("resume").map(Value::take))
        .filter(|resume| !resume.is_null())
        .ok_or_else(|| AppError::Validation("Resume JSON is required.".to_string()))?;

    let resume: TailoredResume = serde_json::from_value(resume)
        .map_err(|e| AppError::Render(format!("Failed to render resume: {e}")))?;

    let html = render_resume(&resume)
        .map_err(|e| AppError::Render(format!("Failed to render resume: {e}")))?;

    info!("Rendered resume: {} bytes", html.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={DOWNLOAD_FILENAME}"),
            ),
        ],
        html,
    )
        .into_response())
}
