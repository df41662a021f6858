//! Resume Generation — turns (original resume, job description) into a `TailoredResume`.
//!
//! Flow: credential check → job description check → read resume → extract
//!       education → build prompt + schema → one bounded OpenAI call →
//!       extract output text → parse JSON → schema check.
//!
//! A single attempt is made per request. There is no retry and no caching.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::education::extract_education_section;
use crate::generation::prompts::{build_generation_input, build_tailoring_prompt};
use crate::generation::schema::{tailored_resume_schema, SCHEMA_NAME};
use crate::llm_client::{ResponsesBackend, ResponsesRequest};
use crate::models::resume::TailoredResume;

/// Hard deadline for the outbound generation call.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Stateless apart from immutable configuration; safe to share across requests.
#[derive(Clone)]
pub struct ResumeGenerator {
    backend: Arc<dyn ResponsesBackend>,
    api_key: Option<String>,
    resume_path: PathBuf,
}

impl ResumeGenerator {
    pub fn new(backend: Arc<dyn ResponsesBackend>, config: &Config) -> Self {
        Self {
            backend,
            api_key: config.openai_api_key.clone(),
            resume_path: config.resume_path.clone(),
        }
    }

    /// Runs the full tailoring pipeline for one job description.
    pub async fn generate(&self, job_description: Option<&str>) -> Result<TailoredResume, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Missing OPENAI_API_KEY.".to_string()))?;

        let job_description = job_description
            .map(str::trim)
            .filter(|jd| !jd.is_empty())
            .ok_or_else(|| AppError::Validation("Job description is required.".to_string()))?;

        let resume_text = tokio::fs::read_to_string(&self.resume_path)
            .await
            .with_context(|| {
                format!("Failed to read resume at {}", self.resume_path.display())
            })?;

        let education = extract_education_section(&resume_text);
        if education.is_empty() {
            warn!("Resume has no '## EDUCATION' section; prompt will restate nothing");
        }

        let prompt = build_tailoring_prompt(&resume_text, &education);
        let request = ResponsesRequest::json_schema(
            build_generation_input(&prompt, job_description),
            SCHEMA_NAME,
            tailored_resume_schema(),
        );

        info!(
            "Requesting tailored resume: {} input bytes, {} job description bytes",
            request.input.len(),
            job_description.len()
        );

        // Dropping the backend future on expiry aborts the in-flight request.
        let payload = tokio::time::timeout(
            GENERATION_TIMEOUT,
            self.backend.create_response(api_key, &request),
        )
        .await
        .map_err(|_| AppError::Timeout)??;

        let text = payload.output_text();
        let resume = parse_tailored_resume(&text)?;

        info!(
            "Tailored resume generated: {} experience, {} academic, {} skill groups",
            resume.experience.len(),
            resume.academic_experience.len(),
            resume.skills.len()
        );

        Ok(resume)
    }
}

/// Parses model output text, first as JSON and then against the closed resume
/// shape. Both failures carry the raw text for diagnostics.
pub fn parse_tailored_resume(text: &str) -> Result<TailoredResume, AppError> {
    let schema_mismatch = || AppError::MalformedOutput {
        message: "Model returned JSON that does not match the resume schema.".to_string(),
        raw: text.to_string(),
    };

    let value: Value = serde_json::from_str(text).map_err(|_| AppError::MalformedOutput {
        message: "Model returned invalid JSON.".to_string(),
        raw: text.to_string(),
    })?;

    let resume: TailoredResume = serde_json::from_value(value.clone()).map_err(|e| {
        warn!("Model output failed schema check: {e}");
        schema_mismatch()
    })?;

    // Serialising back drops any property the schema does not name.
    let canonical = serde_json::to_value(&resume).map_err(|e| AppError::Internal(e.into()))?;
    if canonical != value {
        warn!("Model output carries properties outside the resume schema");
        return Err(schema_mismatch());
    }

    Ok(resume)
}
