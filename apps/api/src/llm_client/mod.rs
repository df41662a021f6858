/// LLM Client — the single point of entry for all OpenAI Responses API calls.
///
/// No other module talks to the generation service directly. The generator
/// depends on the `ResponsesBackend` trait so tests can substitute the service.
///
/// Model: gpt-4o-mini (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The model used for every tailoring request.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Response decode error: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /responses` with schema-constrained text output.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: String,
    pub text: TextConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextConfig {
    pub format: TextFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextFormat {
    pub name: String,
    #[serde(rename = "type")]
    pub format_type: String,
    pub schema: Value,
}

impl ResponsesRequest {
    /// Builds a request whose output must conform to `schema`.
    pub fn json_schema(input: String, schema_name: &str, schema: Value) -> Self {
        Self {
            model: MODEL.to_string(),
            input,
            text: TextConfig {
                format: TextFormat {
                    name: schema_name.to_string(),
                    format_type: "json_schema".to_string(),
                    schema,
                },
            },
        }
    }
}

/// The subset of the Responses API payload we consume.
/// Every level is optional: a malformed payload degrades to empty output text.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesPayload {
    #[serde(default)]
    pub output: Option<Vec<OutputItem>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Option<Vec<ContentPart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type", default)]
    pub part_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesPayload {
    /// Joins the non-empty `output_text` parts of the first output item with
    /// newlines and trims the result. Returns `""` when the path is absent.
    pub fn output_text(&self) -> String {
        let parts = self
            .output
            .as_ref()
            .and_then(|items| items.first())
            .and_then(|item| item.content.as_ref());

        let Some(parts) = parts else {
            return String::new();
        };

        parts
            .iter()
            .filter(|part| part.part_type.as_deref() == Some("output_text"))
            .filter_map(|part| part.text.as_deref())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend seam
// ────────────────────────────────────────────────────────────────────────────

/// A generation service that accepts a Responses request.
///
/// Carried by `ResumeGenerator` as `Arc<dyn ResponsesBackend>`. Dropping the
/// returned future must abort the in-flight call.
#[async_trait]
pub trait ResponsesBackend: Send + Sync {
    async fn create_response(
        &self,
        api_key: &str,
        request: &ResponsesRequest,
    ) -> Result<ResponsesPayload, LlmError>;
}

/// The `reqwest`-backed OpenAI client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

#[async_trait]
impl ResponsesBackend for LlmClient {
    /// Single attempt; the caller owns the deadline.
    async fn create_response(
        &self,
        api_key: &str,
        request: &ResponsesRequest,
    ) -> Result<ResponsesPayload, LlmError> {
        let response = self
            .client
            .post(self.responses_url())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("OpenAI call succeeded: {} response bytes", body.len());

        match serde_json::from_str(&body) {
            Ok(payload) => Ok(payload),
            Err(source) => Err(LlmError::Decode { source, body }),
        }
    }
}
